//! Steps that enumerate a shape assembled from the scenario text.

use crate::fixtures::{EnumerationState, StepShape};
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use scenario_forge::ConfigurationEnumerator;

fn update_shape(enumeration: &EnumerationState, edit: impl FnOnce(&mut StepShape)) {
    let mut shape = enumeration.shape.take().unwrap_or_default();
    edit(&mut shape);
    enumeration.shape.set(shape);
}

#[given("an axis {key} with {count:usize} options")]
fn axis(enumeration: &EnumerationState, key: String, count: usize) {
    update_shape(enumeration, |shape| shape.axes.push((key, count)));
}

#[given("configurations selecting {a} together with {b} are invalid")]
fn excluded(enumeration: &EnumerationState, a: String, b: String) {
    let split = |option: &str| {
        let key: String = option.chars().take_while(char::is_ascii_alphabetic).collect();
        (key, option.to_owned())
    };
    update_shape(enumeration, |shape| {
        shape.excluded = Some((split(&a), split(&b)));
    });
}

#[when("the axes are enumerated")]
fn enumerate(enumeration: &EnumerationState) -> Result<()> {
    let shape = enumeration
        .shape
        .take()
        .ok_or_else(|| anyhow!("no axes were declared"))?;
    let configs = ConfigurationEnumerator::new(&shape).enumerate()?;
    enumeration.configs.set(configs);
    Ok(())
}

#[then("{count:usize} configurations are produced")]
fn produced(enumeration: &EnumerationState, count: usize) -> Result<()> {
    let actual = enumeration
        .configs
        .with_ref(Vec::len)
        .ok_or_else(|| anyhow!("nothing was enumerated"))?;
    ensure!(actual == count, "expected {count} configurations, got {actual}");
    Ok(())
}

#[then("configuration {position:usize} selects {first} and {second}")]
fn selects(
    enumeration: &EnumerationState,
    position: usize,
    first: String,
    second: String,
) -> Result<()> {
    let values = enumeration
        .configs
        .with_ref(|configs| {
            configs.get(position.saturating_sub(1)).map(|config| {
                config
                    .selections()
                    .into_iter()
                    .map(|(_, value)| value.to_owned())
                    .collect::<Vec<_>>()
            })
        })
        .flatten()
        .ok_or_else(|| anyhow!("configuration {position} does not exist"))?;
    ensure!(values == [first, second], "configuration {position} selects {values:?}");
    Ok(())
}
