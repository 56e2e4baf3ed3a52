//! Steps that build and inspect a generated feature document.

use crate::fixtures::GenerationState;
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use scenario_forge::params::{GroupParams, MemberParams};
use scenario_forge::{GenerationContext, NOT_IN_A_GROUP, Role};
use scenario_forge_cli::build_feature;
use scenario_forge_cli::settings::GeneratorSettings;
use test_helpers::text::{fixture_rows, scenario_numbers, unquote};

fn group(name: &str, members: &[(&str, Role)]) -> GroupParams {
    GroupParams {
        name: name.to_owned(),
        members: members
            .iter()
            .map(|&(username, role)| MemberParams {
                username: username.to_owned(),
                role,
            })
            .collect(),
    }
}

fn document(generation: &GenerationState) -> Result<String> {
    generation
        .document
        .with_ref(Clone::clone)
        .ok_or_else(|| anyhow!("no document was generated"))
}

#[given("default generator settings")]
fn default_settings(generation: &GenerationState) {
    generation.settings.set(GeneratorSettings::default());
}

#[given("numbering starts at {first:u64}")]
fn numbering_starts_at(generation: &GenerationState, first: u64) {
    generation.first_scenario.set(first);
}

#[given("a roster with group red holding t9 and s9")]
fn custom_roster(generation: &GenerationState) {
    generation.settings.set(GeneratorSettings {
        roster: vec![group(
            "red",
            &[("t9", Role::EditingTeacher), ("s9", Role::Student)],
        )],
        ..GeneratorSettings::default()
    });
}

#[given("a roster declaring group red twice")]
fn repeated_group(generation: &GenerationState) {
    generation.settings.set(GeneratorSettings {
        roster: vec![
            group("red", &[("t9", Role::Teacher)]),
            group("red", &[("s9", Role::Student)]),
        ],
        ..GeneratorSettings::default()
    });
}

#[when("the feature is generated")]
fn generate(generation: &GenerationState) -> Result<()> {
    let settings = generation
        .settings
        .take()
        .ok_or_else(|| anyhow!("settings must be prepared first"))?;
    let context = GenerationContext::starting_at(generation.first_scenario.take().unwrap_or(0));
    match build_feature(&settings, &context).and_then(|feature| feature.serialize()) {
        Ok(document) => generation.document.set(document),
        Err(err) => generation.error.set(err.to_string()),
    }
    Ok(())
}

#[then("the document has {count:usize} scenarios")]
fn scenario_count(generation: &GenerationState, count: usize) -> Result<()> {
    let numbers = scenario_numbers(&document(generation)?);
    ensure!(numbers.len() == count, "expected {count} scenarios, found {}", numbers.len());
    Ok(())
}

#[then("scenario numbers increase from {first:u64}")]
fn numbers_increase(generation: &GenerationState, first: u64) -> Result<()> {
    let numbers = scenario_numbers(&document(generation)?);
    let expected: Vec<u64> = (first..).take(numbers.len()).collect();
    ensure!(numbers == expected, "numbers {numbers:?} are not consecutive from {first}");
    Ok(())
}

#[then("the {fixture} table has {rows:usize} rows")]
fn table_rows(generation: &GenerationState, fixture: String, rows: usize) -> Result<()> {
    let table = fixture_rows(&document(generation)?, unquote(&fixture));
    ensure!(
        table.len() == rows,
        "{fixture} table has {} rows, expected {rows}",
        table.len()
    );
    Ok(())
}

#[then("no group table mentions the ungrouped sentinel")]
fn sentinel_hidden(generation: &GenerationState) -> Result<()> {
    let doc = document(generation)?;
    for fixture in ["groups", "group members"] {
        let mentions = fixture_rows(&doc, fixture)
            .iter()
            .flatten()
            .any(|cell| cell == NOT_IN_A_GROUP);
        ensure!(!mentions, "{fixture} table lists {NOT_IN_A_GROUP}");
    }
    Ok(())
}

#[then("generation fails mentioning {text}")]
fn generation_fails(generation: &GenerationState, text: String) -> Result<()> {
    ensure!(generation.document.is_empty(), "a document was generated");
    let message = generation
        .error
        .take()
        .ok_or_else(|| anyhow!("generation did not fail"))?;
    ensure!(message.contains(unquote(&text)), "unexpected error: {message}");
    Ok(())
}
