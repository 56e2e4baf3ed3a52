//! Configurations: one point in the space spanned by a shape's settings.
//!
//! A [`ConfigShape`] declares the axes (as fresh [`Setting`] values) and the
//! validity predicate; [`Configuration`] owns one copy of those axes and
//! guards every read and write by key. [`ConfigurationEnumerator`] walks the
//! full cartesian product of a shape.

mod enumerate;

use std::fmt;

use crate::layout::{indent, newlines};
use crate::params::ParamBag;
use crate::{ForgeError, ForgeResult, Setting, UNSET};

pub use enumerate::{Assignment, ConfigurationEnumerator};

/// Declares the axes of a configuration space and which points are valid.
pub trait ConfigShape {
    /// Fresh, unselected settings in declaration order.
    fn axes(&self) -> Vec<Setting>;

    /// Whether `config` is a point worth generating a scenario for.
    ///
    /// Must depend only on the selections held by `config`.
    fn is_valid(&self, _config: &Configuration) -> bool {
        true
    }
}

/// A mapping from setting key to selected option.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    settings: Vec<Setting>,
}

impl Configuration {
    /// Create a configuration over `settings`.
    #[must_use]
    pub const fn new(settings: Vec<Setting>) -> Self {
        Self { settings }
    }

    /// Create an unselected configuration with the axes of `shape`.
    #[must_use]
    pub fn from_shape<S: ConfigShape + ?Sized>(shape: &S) -> Self {
        Self::new(shape.axes())
    }

    /// Create a configuration for `shape` and apply the recognised keys
    /// of `bag`.
    ///
    /// # Errors
    ///
    /// Fails when a recognised key carries an undeclared option.
    pub fn from_params<S: ConfigShape + ?Sized>(shape: &S, bag: &ParamBag) -> ForgeResult<Self> {
        let mut config = Self::from_shape(shape);
        config.apply_params(bag)?;
        Ok(config)
    }

    /// Declared settings in order.
    #[must_use]
    pub fn settings(&self) -> &[Setting] {
        &self.settings
    }

    /// Look up the setting declared under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::UnknownSetting`] for undeclared keys.
    pub fn setting(&self, key: &str) -> ForgeResult<&Setting> {
        self.settings
            .iter()
            .find(|setting| setting.key() == key)
            .ok_or_else(|| ForgeError::unknown_setting(key))
    }

    fn setting_mut(&mut self, key: &str) -> ForgeResult<&mut Setting> {
        self.settings
            .iter_mut()
            .find(|setting| setting.key() == key)
            .ok_or_else(|| ForgeError::unknown_setting(key))
    }

    /// Selected option key for `key`, or [`UNSET`].
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::UnknownSetting`] for undeclared keys.
    pub fn get(&self, key: &str) -> ForgeResult<&str> {
        self.setting(key).map(Setting::value)
    }

    /// Select `option` for the setting declared under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::UnknownSetting`] for undeclared keys and
    /// [`ForgeError::InvalidOption`] for undeclared options.
    pub fn set(&mut self, key: &str, option: &str) -> ForgeResult<()> {
        self.setting_mut(key)?.set_value(option)
    }

    /// Whether the setting under `key` currently selects `option`.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::UnknownSetting`] for undeclared keys.
    pub fn is(&self, key: &str, option: &str) -> ForgeResult<bool> {
        self.get(key).map(|value| value == option)
    }

    /// Key → selected option pairs in declaration order.
    #[must_use]
    pub fn selections(&self) -> Vec<(&str, &str)> {
        self.settings
            .iter()
            .map(|setting| (setting.key(), setting.value()))
            .collect()
    }

    /// Copy recognised keys from `bag` into the configuration.
    ///
    /// Keys that do not name a declared axis are ignored, as are values equal
    /// to [`UNSET`]. Non-string scalars are matched by their JSON text, so
    /// `{"groupmode": 1}` selects option `"1"`.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::InvalidOption`] when a recognised key names an
    /// undeclared option.
    pub fn apply_params(&mut self, bag: &ParamBag) -> ForgeResult<()> {
        for setting in &mut self.settings {
            let Some(raw) = bag.get(setting.key()) else {
                continue;
            };
            let option = match raw {
                serde_json::Value::String(text) => text.clone(),
                serde_json::Value::Null => continue,
                other => other.to_string(),
            };
            if option == UNSET || option.is_empty() {
                continue;
            }
            setting.set_value(&option)?;
        }
        Ok(())
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.selections() == other.selections()
    }
}

impl Eq for Configuration {}

impl fmt::Display for Configuration {
    /// One comment line per setting, indented one level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = indent(1);
        let nl = newlines(1);
        for setting in &self.settings {
            write!(f, "{pad}# {setting}{nl}")?;
        }
        Ok(())
    }
}
