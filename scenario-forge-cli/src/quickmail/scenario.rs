//! One generated Quickmail scenario.

use scenario_forge::steps::{
    add_block, click_on, comment, follow, log_in_as, log_out, save_changes, set_fields,
    should_see, should_see_in, turn_editing_on,
};
use scenario_forge::{Configuration, Feature, ForgeResult, Scenario, StepPrefix, User};

use super::{ALLOW_STUDENTS, ALLOW_STUDENTS_COURSE, FERPA, GROUP_MODE, NEVER, Policy};

const LEVEL: usize = 2;
const COMPOSE: &str = "Compose New Email";
const BLOCK: &str = "Quickmail";

/// Admin setup followed by one visibility check per user.
#[derive(Debug, Clone)]
pub struct FerpaScenario {
    config: Configuration,
}

impl FerpaScenario {
    /// Scenario exercising `config`.
    #[must_use]
    pub const fn new(config: Configuration) -> Self {
        Self { config }
    }

    fn policy(&self) -> Policy<'_> {
        Policy::new(&self.config)
    }

    fn admin_setup(&self, feature: &Feature) -> ForgeResult<String> {
        let site = self.config.setting(ALLOW_STUDENTS)?;
        let ferpa = self.config.setting(FERPA)?;
        let mode = self.config.setting(GROUP_MODE)?;

        let mut steps = log_in_as("admin", StepPrefix::Given, LEVEL);
        steps.push_str(&set_fields(
            &[
                vec![site.label(), site.value_label()],
                vec![ferpa.label(), ferpa.value_label()],
            ],
            true,
            StepPrefix::And,
            LEVEL,
        ));
        if let Some(course) = feature.fixtures().courses().first() {
            steps.push_str(&follow(&course.fullname, StepPrefix::And, LEVEL));
            steps.push_str(&follow("Edit settings", StepPrefix::And, LEVEL));
            steps.push_str(&set_fields(
                &[vec![mode.label(), mode.value_label()]],
                false,
                StepPrefix::And,
                LEVEL,
            ));
            steps.push_str(&save_changes(StepPrefix::And, LEVEL));
            steps.push_str(&turn_editing_on(StepPrefix::And, LEVEL));
            steps.push_str(&add_block(BLOCK, StepPrefix::And, LEVEL));
            if !self.config.is(ALLOW_STUDENTS, NEVER)? {
                let course_level = self.config.setting(ALLOW_STUDENTS_COURSE)?;
                steps.push_str(&click_on(
                    "Configuration",
                    "link",
                    BLOCK,
                    "block",
                    StepPrefix::And,
                    LEVEL,
                ));
                steps.push_str(&set_fields(
                    &[vec![course_level.label(), course_level.value_label()]],
                    false,
                    StepPrefix::And,
                    LEVEL,
                ));
                steps.push_str(&save_changes(StepPrefix::And, LEVEL));
            }
        }
        steps.push_str(&log_out(LEVEL));
        Ok(steps)
    }

    fn user_checks(&self, feature: &Feature, user: &User) -> ForgeResult<String> {
        let policy = self.policy();
        let allowed = policy.user_role_allowed(user)?;

        let mut steps = log_in_as(user.username(), StepPrefix::Given, LEVEL);
        if let Some(course) = feature.fixtures().courses().first() {
            steps.push_str(&follow(&course.fullname, StepPrefix::And, LEVEL));
        }
        steps.push_str(&should_see(COMPOSE, !allowed, StepPrefix::Then, LEVEL));
        if allowed {
            steps.push_str(&click_on(
                COMPOSE,
                "link",
                BLOCK,
                "block",
                StepPrefix::And,
                LEVEL,
            ));
            for other in feature.fixtures().users() {
                if other.username() == user.username() {
                    continue;
                }
                let visible = policy.can_see(feature.fixtures(), user.username(), other.username())?;
                steps.push_str(&should_see_in(
                    &other.full_name(),
                    "#from_users",
                    "css_element",
                    !visible,
                    StepPrefix::And,
                    LEVEL,
                ));
            }
        }
        steps.push_str(&log_out(LEVEL));
        Ok(steps)
    }
}

impl Scenario for FerpaScenario {
    fn config(&self) -> &Configuration {
        &self.config
    }

    fn header_comment(&self, _feature: &Feature) -> String {
        let policy = self.policy();
        let yes_no = |flag: ForgeResult<bool>| if matches!(flag, Ok(true)) { "yes" } else { "no" };
        comment(
            &format!(
                "students allowed: {}, groups enforced: {}",
                yes_no(policy.allow_students()),
                yes_no(policy.groups_enforced()),
            ),
            0,
        )
    }

    fn steps(&self, feature: &Feature) -> ForgeResult<String> {
        let mut steps = self.admin_setup(feature)?;
        for user in feature.fixtures().users() {
            steps.push_str(&self.user_checks(feature, user)?);
        }
        Ok(steps)
    }
}
