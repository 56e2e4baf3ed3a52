//! Core crate for the `scenario_forge` feature-file generator.
//!
//! The crate enumerates a configuration space built from independent
//! [`Setting`] axes, pairs every valid [`Configuration`] with a
//! [`Scenario`], and serialises the resulting [`Feature`] (together with
//! its generated user, group, and course fixtures) into Gherkin-style text.
//!
//! ```rust
//! use scenario_forge::{ConfigShape, ConfigurationEnumerator, Setting, SettingOption};
//!
//! struct Access;
//!
//! impl ConfigShape for Access {
//!     fn axes(&self) -> Vec<Setting> {
//!         vec![Setting::new("access", "Access").with_options([
//!             SettingOption::new("yes", "Yes"),
//!             SettingOption::new("no", "No"),
//!         ])]
//!     }
//! }
//!
//! let configs = ConfigurationEnumerator::new(&Access).enumerate()?;
//! assert_eq!(configs.len(), 2);
//! # Ok::<_, scenario_forge::ForgeError>(())
//! ```

pub mod config;
pub mod document;
mod error;
pub mod fixture;
pub mod layout;
pub mod params;
mod setting;
pub mod steps;

pub use config::{ConfigShape, Configuration, ConfigurationEnumerator};
pub use document::{Background, Feature, GenerationContext, Scenario, ScenarioCounter};
pub use error::{ForgeError, ForgeResult};
pub use fixture::{Course, FixtureGraph, Group, NOT_IN_A_GROUP, Role, Roster, User};
pub use setting::{NOT_SET_LABEL, Setting, SettingOption, UNSET};
pub use steps::StepPrefix;
