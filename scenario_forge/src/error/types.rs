//! Primary error enum for the generator core.

use thiserror::Error;

/// Errors raised by the configuration, fixture, and document layers.
///
/// Every variant describes a programming or fixture-authoring defect; none of
/// them are transient, so callers should surface them rather than retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ForgeError {
    /// A configuration was asked for an axis it does not declare.
    #[error("Setting does not exist for key '{key}'")]
    UnknownSetting {
        /// Key that was requested.
        key: String,
    },

    /// An option key is not part of the setting's option set.
    #[error("Invalid key '{option}' for setting '{setting}'")]
    InvalidOption {
        /// Label of the setting being assigned.
        setting: String,
        /// Option key that was rejected.
        option: String,
    },

    /// Two groups with the same name were declared in one roster.
    #[error("Possibly trying to create two groups with the same name: '{name}'")]
    DuplicateGroup {
        /// Repeated group name.
        name: String,
    },

    /// Group membership was initialised a second time.
    #[error("Cannot alter group membership.")]
    MembershipLocked,

    /// A membership link referenced a user the feature does not own.
    #[error("unknown user '{username}'")]
    UnknownUser {
        /// Username that could not be resolved.
        username: String,
    },

    /// A membership link referenced a group the feature does not own.
    #[error("unknown group '{name}'")]
    UnknownGroup {
        /// Group name that could not be resolved.
        name: String,
    },

    /// A role name did not match any known role.
    #[error("unknown role '{name}'")]
    UnknownRole {
        /// Name that could not be parsed.
        name: String,
    },

    /// A parameter bag could not be translated into typed fields.
    #[error("invalid parameters for {target}: {source}")]
    Params {
        /// Entity the bag was meant to populate.
        target: &'static str,
        /// Underlying deserialisation failure.
        #[source]
        source: serde_json::Error,
    },
}
