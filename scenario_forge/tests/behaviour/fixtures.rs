//! Shared state and shapes for the behavioural scenarios.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use scenario_forge::{
    ConfigShape, Configuration, Feature, ForgeError, GenerationContext, Setting, SettingOption,
};

/// A shape assembled step by step.
#[derive(Debug, Clone, Default)]
pub struct StepShape {
    pub axes: Vec<(String, usize)>,
    pub excluded: Option<((String, String), (String, String))>,
}

impl ConfigShape for StepShape {
    fn axes(&self) -> Vec<Setting> {
        self.axes
            .iter()
            .map(|(key, count)| {
                Setting::new(key.as_str(), key.to_uppercase()).with_options(
                    (1..=*count).map(|n| {
                        let option = format!("{key}{n}");
                        SettingOption::new(option.as_str(), option.as_str())
                    }),
                )
            })
            .collect()
    }

    fn is_valid(&self, config: &Configuration) -> bool {
        self.excluded.as_ref().is_none_or(|((a, a_opt), (b, b_opt))| {
            !(config.is(a, a_opt).unwrap_or(false) && config.is(b, b_opt).unwrap_or(false))
        })
    }
}

/// State for the enumeration scenarios.
#[derive(Debug, Default, ScenarioState)]
pub struct EnumerationState {
    pub shape: Slot<StepShape>,
    pub configs: Slot<Vec<Configuration>>,
}

/// State for the document scenarios.
#[derive(Debug, Default, ScenarioState)]
pub struct DocumentState {
    pub features: Slot<Vec<Feature>>,
    pub context: Slot<GenerationContext>,
    pub rejection: Slot<ForgeError>,
}

#[fixture]
pub fn enumeration() -> EnumerationState {
    EnumerationState::default()
}

#[fixture]
pub fn document() -> DocumentState {
    DocumentState::default()
}
