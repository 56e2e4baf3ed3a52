//! Steps that build features and inspect their fixtures and numbering.

use crate::fixtures::DocumentState;
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use scenario_forge::{
    Configuration, Feature, ForgeError, ForgeResult, GenerationContext, Roster, Scenario,
};
use test_helpers::text::{scenario_numbers, unquote};

#[derive(Debug)]
struct EmptyScenario(Configuration);

impl Scenario for EmptyScenario {
    fn config(&self) -> &Configuration {
        &self.0
    }

    fn steps(&self, _feature: &Feature) -> ForgeResult<String> {
        Ok(String::new())
    }
}

fn with_first_feature<T>(
    document: &DocumentState,
    inspect: impl FnOnce(&mut Feature) -> T,
) -> Result<T> {
    let mut features = document.features.take().unwrap_or_default();
    let outcome = features
        .first_mut()
        .map(inspect)
        .ok_or_else(|| anyhow!("no feature was declared"));
    document.features.set(features);
    outcome
}

#[given("a feature titled {title}")]
fn feature_titled(document: &DocumentState, title: String) {
    let mut features = document.features.take().unwrap_or_default();
    features.push(Feature::new(unquote(&title)));
    document.features.set(features);
}

#[when("membership is initialised from an empty roster")]
fn init_standard(document: &DocumentState) -> Result<()> {
    with_first_feature(document, |feature| feature.init_groups_users(&Roster::new()))??;
    Ok(())
}

#[when("membership is initialised again")]
fn init_again(document: &DocumentState) -> Result<()> {
    if let Err(err) = with_first_feature(document, |feature| feature.init_groups_users(&Roster::new()))? {
        document.rejection.set(err);
    }
    Ok(())
}

#[when("each feature receives {count:usize} scenarios")]
fn add_scenarios(document: &DocumentState, count: usize) {
    let context = GenerationContext::new();
    let mut features = document.features.take().unwrap_or_default();
    for feature in &mut features {
        for _ in 0..count {
            feature.add_scenario(&context, EmptyScenario(Configuration::default()));
        }
    }
    document.features.set(features);
    document.context.set(context);
}

#[then("the feature has {users:usize} users and {groups:usize} groups")]
fn counts(document: &DocumentState, users: usize, groups: usize) -> Result<()> {
    let (actual_users, actual_groups) = with_first_feature(document, |feature| {
        (feature.fixtures().users().len(), feature.fixtures().groups().len())
    })?;
    ensure!(
        (actual_users, actual_groups) == (users, groups),
        "found {actual_users} users and {actual_groups} groups"
    );
    Ok(())
}

#[then("user {username} is an {role} in {group}")]
fn user_role_and_group(
    document: &DocumentState,
    username: String,
    role: String,
    group: String,
) -> Result<()> {
    let found = with_first_feature(document, |feature| {
        feature
            .user(&username)
            .map(|user| (user.role().name() == role, user.in_group(&group)))
    })?;
    ensure!(found == Some((true, true)), "{username} is not an {role} in {group}");
    Ok(())
}

#[then("the second initialisation is rejected")]
fn rejected(document: &DocumentState) -> Result<()> {
    let err = document
        .rejection
        .take()
        .ok_or_else(|| anyhow!("the second initialisation succeeded"))?;
    ensure!(matches!(err, ForgeError::MembershipLocked), "unexpected error: {err}");
    Ok(())
}

#[then("the rendered numbers are {numbers}")]
fn rendered_numbers(document: &DocumentState, numbers: String) -> Result<()> {
    let expected: Vec<u64> = numbers
        .split(',')
        .map(|number| number.trim().parse())
        .collect::<Result<_, _>>()?;
    let features = document.features.take().unwrap_or_default();
    let mut rendered = Vec::new();
    for feature in &features {
        rendered.extend(scenario_numbers(&feature.serialize()?));
    }
    ensure!(rendered == expected, "rendered {rendered:?}");
    let next = document
        .context
        .with_ref(|context| context.counter().peek())
        .ok_or_else(|| anyhow!("no generation context"))?;
    ensure!(next == 4, "counter stopped at {next}");
    Ok(())
}
