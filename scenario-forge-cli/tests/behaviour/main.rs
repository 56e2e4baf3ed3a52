//! Behavioural tests for `scenario-forge` using `rstest-bdd`.
//!
//! [`fixtures`] holds the shared scenario state, [`steps`] the step
//! definitions, and [`scenarios`] binds the `.feature` files under
//! `tests/features`.

mod fixtures;
mod scenarios;
mod steps;
