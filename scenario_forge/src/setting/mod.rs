//! A single configuration axis and its mutually exclusive options.

use std::collections::HashMap;
use std::fmt;

use crate::{ForgeError, ForgeResult};

/// Value reported by [`Setting::value`] when no option has been selected.
pub const UNSET: &str = "-";

/// Label rendered in place of an option label when nothing is selected.
pub const NOT_SET_LABEL: &str = "not set";

/// One selectable option of a [`Setting`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingOption {
    /// Unique key for the option within its setting.
    pub key: String,
    /// Label as presented in the application UI.
    pub label: String,
}

impl SettingOption {
    /// Create an option from its key and UI label.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for SettingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A named axis of mutually exclusive options.
///
/// Options keep their declaration order, which is also the order the
/// enumerator visits them in. The selected option is only ever changed
/// through [`Setting::set_value`], so it always refers to a declared option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    key: String,
    label: String,
    unique_label: Option<String>,
    options: Vec<SettingOption>,
    by_label: HashMap<String, String>,
    value: Option<String>,
}

impl Setting {
    /// Create a setting with no options and no selection.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            unique_label: None,
            options: Vec::new(),
            by_label: HashMap::new(),
            value: None,
        }
    }

    /// Differentiate this setting from another one sharing its label, for
    /// example an admin-level and a course-level setting with the same name.
    #[must_use]
    pub fn with_unique_label(mut self, unique_label: impl Into<String>) -> Self {
        self.unique_label = Some(unique_label.into());
        self
    }

    /// Append every option from `options`.
    #[must_use]
    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = SettingOption>,
    {
        for option in options {
            self.add_option(option);
        }
        self
    }

    /// Add an option, replacing any earlier option with the same key.
    pub fn add_option(&mut self, option: SettingOption) {
        self.by_label.insert(option.label.clone(), option.key.clone());
        if let Some(existing) = self.options.iter_mut().find(|o| o.key == option.key) {
            if existing.label != option.label
                && self.by_label.get(&existing.label) == Some(&existing.key)
            {
                self.by_label.remove(&existing.label);
            }
            *existing = option;
        } else {
            self.options.push(option);
        }
    }

    /// Key identifying this setting inside a configuration.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Label as presented in the UI.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The unique label when one was provided, otherwise [`Setting::label`].
    #[must_use]
    pub fn unique_label(&self) -> &str {
        self.unique_label.as_deref().unwrap_or(&self.label)
    }

    /// Options in declaration order.
    #[must_use]
    pub fn options(&self) -> &[SettingOption] {
        &self.options
    }

    /// Look an option up by key.
    #[must_use]
    pub fn option_by_key(&self, key: &str) -> Option<&SettingOption> {
        self.options.iter().find(|option| option.key == key)
    }

    /// Look an option up by its UI label.
    #[must_use]
    pub fn option_by_label(&self, label: &str) -> Option<&SettingOption> {
        self.by_label
            .get(label)
            .and_then(|key| self.option_by_key(key))
    }

    /// Key of the selected option, or [`UNSET`] when nothing is selected.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or(UNSET)
    }

    /// Whether an option has been selected.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// The selected option, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&SettingOption> {
        self.value.as_deref().and_then(|key| self.option_by_key(key))
    }

    /// Select the option identified by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::InvalidOption`] when `key` is not a declared
    /// option; the previous selection is kept.
    pub fn set_value(&mut self, key: &str) -> ForgeResult<()> {
        if self.option_by_key(key).is_none() {
            return Err(ForgeError::invalid_option(self.label.as_str(), key));
        }
        self.value = Some(key.to_owned());
        Ok(())
    }

    /// Label of the selected option, or [`NOT_SET_LABEL`].
    #[must_use]
    pub fn value_label(&self) -> &str {
        self.selected_option()
            .map_or(NOT_SET_LABEL, |option| option.label.as_str())
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.unique_label(), self.value_label())
    }
}
