//! The Quickmail FERPA configuration matrix.
//!
//! Four axes decide who may compose messages and which recipients each
//! sender is shown: the site-wide student permission, the course-level
//! student permission, the site-wide group policy, and the course group
//! mode.

mod scenario;

use scenario_forge::{
    ConfigShape, Configuration, FixtureGraph, ForgeResult, Role, Setting, SettingOption, User,
};

pub use scenario::FerpaScenario;

/// Key of the site-wide student permission.
pub const ALLOW_STUDENTS: &str = "allowstudents";
/// Key of the course-level student permission.
pub const ALLOW_STUDENTS_COURSE: &str = "allowstudentscourse";
/// Key of the site-wide group policy.
pub const FERPA: &str = "ferpa";
/// Key of the course group mode.
pub const GROUP_MODE: &str = "groupmode";

/// Site-wide permission value that overrides every course.
pub const NEVER: &str = "-1";
/// Yes, for both student permission axes.
pub const YES: &str = "1";

/// Group policy: always separate users by group.
pub const STRICT_FERPA: &str = "strictferpa";
/// Group policy: follow the course group mode.
pub const COURSE_FERPA: &str = "courseferpa";
/// Group policy: ignore groups.
pub const NO_FERPA: &str = "noferpa";

/// Course group mode values.
pub const NO_GROUPS: &str = "0";
/// Separate groups.
pub const SEPARATE_GROUPS: &str = "1";

/// Unit shape describing the Quickmail matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuickmailFerpa;

impl ConfigShape for QuickmailFerpa {
    fn axes(&self) -> Vec<Setting> {
        vec![
            Setting::new(ALLOW_STUDENTS, "Allow students to use Quickmail")
                .with_unique_label("Allow students to use Quickmail (site)")
                .with_options([
                    SettingOption::new(YES, "Yes"),
                    SettingOption::new("0", "No"),
                    SettingOption::new(NEVER, "Never"),
                ]),
            Setting::new(ALLOW_STUDENTS_COURSE, "Allow students to use Quickmail")
                .with_unique_label("Allow students to use Quickmail (course)")
                .with_options([SettingOption::new(YES, "Yes"), SettingOption::new("0", "No")]),
            Setting::new(FERPA, "FERPA mode").with_options([
                SettingOption::new(STRICT_FERPA, "Always separate"),
                SettingOption::new(COURSE_FERPA, "Respect course mode"),
                SettingOption::new(NO_FERPA, "No group respect"),
            ]),
            Setting::new(GROUP_MODE, "Group mode").with_options([
                SettingOption::new(NO_GROUPS, "No groups"),
                SettingOption::new(SEPARATE_GROUPS, "Separate groups"),
                SettingOption::new("2", "Visible groups"),
            ]),
        ]
    }

    /// Drops points that duplicate another: under `Never` the course
    /// permission is ignored, and outside course mode the group mode is.
    fn is_valid(&self, config: &Configuration) -> bool {
        let is = |key: &str, option: &str| config.is(key, option).unwrap_or(false);
        let redundant_course = is(ALLOW_STUDENTS, NEVER) && !is(ALLOW_STUDENTS_COURSE, YES);
        let redundant_mode = !is(FERPA, COURSE_FERPA) && !is(GROUP_MODE, NO_GROUPS);
        !(redundant_course || redundant_mode)
    }
}

/// Access rules of one Quickmail configuration.
#[derive(Debug, Clone, Copy)]
pub struct Policy<'a> {
    config: &'a Configuration,
}

impl<'a> Policy<'a> {
    /// Rules for `config`.
    #[must_use]
    pub const fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Whether students may compose messages in the course.
    ///
    /// # Errors
    ///
    /// Fails when `config` lacks the permission axes.
    pub fn allow_students(&self) -> ForgeResult<bool> {
        if self.config.is(ALLOW_STUDENTS, NEVER)? {
            return Ok(false);
        }
        self.config.is(ALLOW_STUDENTS_COURSE, YES)
    }

    /// Teachers may always compose; students only when allowed.
    ///
    /// # Errors
    ///
    /// See [`Policy::allow_students`].
    pub fn user_role_allowed(&self, user: &User) -> ForgeResult<bool> {
        if user.is_teacher() {
            return Ok(true);
        }
        self.allow_students()
    }

    /// Whether recipients are restricted to the sender's groups.
    ///
    /// # Errors
    ///
    /// Fails when `config` lacks the group axes.
    pub fn groups_enforced(&self) -> ForgeResult<bool> {
        match self.config.get(FERPA)? {
            STRICT_FERPA => Ok(true),
            COURSE_FERPA => self.config.is(GROUP_MODE, SEPARATE_GROUPS),
            _ => Ok(false),
        }
    }

    /// Whether `viewer` is offered `other` as a recipient.
    ///
    /// Editing teachers see everyone. Otherwise, when groups are enforced,
    /// the two users must share a real group.
    ///
    /// # Errors
    ///
    /// Fails when either user is unknown to `fixtures`.
    pub fn can_see(&self, fixtures: &FixtureGraph, viewer: &str, other: &str) -> ForgeResult<bool> {
        let viewer_groups = fixtures.effective_groups(viewer)?;
        let other_groups = fixtures.effective_groups(other)?;
        if !self.groups_enforced()? {
            return Ok(true);
        }
        if fixtures
            .user(viewer)
            .is_some_and(|user| user.role() == Role::EditingTeacher)
        {
            return Ok(true);
        }
        Ok(viewer_groups
            .iter()
            .filter(|group| !group.is_sentinel())
            .any(|group| other_groups.iter().any(|theirs| theirs.name() == group.name())))
    }
}
