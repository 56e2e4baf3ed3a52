//! Binds the feature files to the shared fixtures.

use crate::fixtures::{GenerationState, SettingsState, generation, layering};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/generate.feature",
    fixtures = [generation: GenerationState]
);
scenarios!(
    "tests/features/settings.feature",
    fixtures = [layering: SettingsState]
);
