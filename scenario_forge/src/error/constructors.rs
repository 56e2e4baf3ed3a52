//! Named constructors for `ForgeError`.

use super::ForgeError;

impl ForgeError {
    /// Construct an [`ForgeError::UnknownSetting`] for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenario_forge::ForgeError;
    /// let err = ForgeError::unknown_setting("groupmode");
    /// assert_eq!(err.to_string(), "Setting does not exist for key 'groupmode'");
    /// ```
    #[must_use]
    pub fn unknown_setting(key: impl Into<String>) -> Self {
        Self::UnknownSetting { key: key.into() }
    }

    /// Construct an [`ForgeError::InvalidOption`].
    #[must_use]
    pub fn invalid_option(setting: impl Into<String>, option: impl Into<String>) -> Self {
        Self::InvalidOption {
            setting: setting.into(),
            option: option.into(),
        }
    }

    /// Construct a [`ForgeError::DuplicateGroup`].
    #[must_use]
    pub fn duplicate_group(name: impl Into<String>) -> Self {
        Self::DuplicateGroup { name: name.into() }
    }

    /// Construct a [`ForgeError::UnknownUser`].
    #[must_use]
    pub fn unknown_user(username: impl Into<String>) -> Self {
        Self::UnknownUser {
            username: username.into(),
        }
    }

    /// Construct a [`ForgeError::UnknownGroup`].
    #[must_use]
    pub fn unknown_group(name: impl Into<String>) -> Self {
        Self::UnknownGroup { name: name.into() }
    }

    /// Construct a [`ForgeError::UnknownRole`].
    #[must_use]
    pub fn unknown_role(name: impl Into<String>) -> Self {
        Self::UnknownRole { name: name.into() }
    }

    /// Wrap a `serde_json` failure raised while reading a parameter bag.
    #[must_use]
    pub const fn params(target: &'static str, source: serde_json::Error) -> Self {
        Self::Params { target, source }
    }

    /// Returns `true` for errors caused by the declared schema (unknown keys,
    /// unknown options, repeated group names).
    #[must_use]
    pub const fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownSetting { .. } | Self::InvalidOption { .. } | Self::DuplicateGroup { .. }
        )
    }
}
