//! Error types produced while building and rendering feature documents.

mod constructors;
mod types;

pub use types::ForgeError;

/// Result alias used throughout the crate.
pub type ForgeResult<T> = Result<T, ForgeError>;
