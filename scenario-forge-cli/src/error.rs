//! Error types for `scenario-forge`.

use camino::Utf8PathBuf;
use scenario_forge::ForgeError;
use thiserror::Error;

/// Errors surfaced by the `scenario-forge` pipeline.
#[derive(Debug, Error)]
pub enum ScenarioForgeError {
    /// The document model rejected the generated input.
    #[error(transparent)]
    Forge(#[from] ForgeError),

    /// Layered settings could not be merged or extracted.
    #[error("failed to load settings: {0}")]
    Settings(#[from] Box<figment::Error>),

    /// An explicitly requested settings file does not exist.
    #[error("settings file not found at {0}")]
    MissingSettingsFile(Utf8PathBuf),

    /// Writing the generated document failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being written when the failure occurred.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl From<figment::Error> for ScenarioForgeError {
    fn from(err: figment::Error) -> Self {
        Self::Settings(Box::new(err))
    }
}

/// Result alias for the CLI pipeline.
pub type Result<T> = std::result::Result<T, ScenarioForgeError>;
