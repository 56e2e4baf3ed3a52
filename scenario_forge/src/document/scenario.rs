//! Scenarios and the run-wide numbering they draw from.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Feature;
use crate::{Configuration, ForgeResult};

/// One generated test case: a configuration plus its rendered steps.
///
/// Implementations render against the owning [`Feature`], which gives them
/// access to the fixture graph without storing a back-reference.
pub trait Scenario: fmt::Debug {
    /// The configuration this scenario exercises.
    fn config(&self) -> &Configuration;

    /// Comment lines printed above the `Scenario:` header. Defaults to none.
    fn header_comment(&self, _feature: &Feature) -> String {
        String::new()
    }

    /// The ordered step lines, each newline-terminated.
    ///
    /// # Errors
    ///
    /// Implementations propagate lookups against the fixture graph or the
    /// configuration that fail.
    fn steps(&self, feature: &Feature) -> ForgeResult<String>;
}

/// Monotonic scenario numbering shared by every feature of a run.
#[derive(Debug, Default)]
pub struct ScenarioCounter {
    next: AtomicU64,
}

impl ScenarioCounter {
    /// A counter whose first number is `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// A counter whose first number is `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Take the next number.
    pub fn next_number(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The number the next call to [`ScenarioCounter::next_number`] returns.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

/// State shared by everything generated in one run.
///
/// Build one context per run and pass it to every
/// [`Feature::add_scenario`] call; numbering then increases across all
/// features built from it.
#[derive(Debug, Default)]
pub struct GenerationContext {
    counter: ScenarioCounter,
}

impl GenerationContext {
    /// A context numbering scenarios from `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: ScenarioCounter::new(),
        }
    }

    /// A context numbering scenarios from `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            counter: ScenarioCounter::starting_at(first),
        }
    }

    /// The scenario counter.
    #[must_use]
    pub const fn counter(&self) -> &ScenarioCounter {
        &self.counter
    }

    /// Take the next scenario number.
    pub fn next_scenario_number(&self) -> u64 {
        self.counter.next_number()
    }
}

/// A scenario with the number it was assigned when added to its feature.
#[derive(Debug)]
pub struct NumberedScenario {
    number: u64,
    scenario: Box<dyn Scenario>,
}

impl NumberedScenario {
    pub(crate) fn new(number: u64, scenario: Box<dyn Scenario>) -> Self {
        Self { number, scenario }
    }

    /// Number rendered in the `Scenario:` header.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// The wrapped scenario.
    #[must_use]
    pub fn scenario(&self) -> &dyn Scenario {
        self.scenario.as_ref()
    }
}
