//! Behavioural tests for `scenario_forge` using `rstest-bdd`.
//!
//! [`fixtures`] defines the scenario state, [`steps`] the step definitions,
//! and [`scenarios`] binds the `.feature` files under `tests/features`.

mod fixtures;
mod scenarios;
mod steps;
