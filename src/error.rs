//! Error types for the comparison pipeline.
//!
//! The error surface is narrow: inputs arrive already decoded, so only the
//! configuration can be rejected. Text content is never an error.

use thiserror::Error;

/// Errors returned by [`crate::compare`] and the option resolver.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The options are contradictory or out of range
    /// (several view modes selected, negative context).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The options request a combination the renderers do not define,
    /// such as word highlighting outside the side-by-side view.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Options or results could not be converted to or from JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiffError>;
