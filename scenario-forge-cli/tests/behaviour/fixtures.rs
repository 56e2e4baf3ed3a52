//! Shared state for the behavioural scenarios.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use scenario_forge_cli::settings::GeneratorSettings;

/// State threaded through the generation steps.
#[derive(Debug, Default, ScenarioState)]
pub struct GenerationState {
    pub settings: Slot<GeneratorSettings>,
    pub first_scenario: Slot<u64>,
    pub document: Slot<String>,
    pub error: Slot<String>,
}

/// State threaded through the settings steps.
#[derive(Debug, Default, ScenarioState)]
pub struct SettingsState {
    pub file_title: Slot<String>,
    pub env_title: Slot<String>,
    pub flag_title: Slot<String>,
    pub loaded: Slot<GeneratorSettings>,
}

#[fixture]
pub fn generation() -> GenerationState {
    GenerationState::default()
}

#[fixture]
pub fn layering() -> SettingsState {
    SettingsState::default()
}
