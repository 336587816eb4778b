//! Cross-cutting error types for Hunt.
//!
//! Document-editing errors live in `hunt-parser`, configuration errors in
//! `hunt-config`. Everything converges on `anyhow` in `hunt-cli`.

use thiserror::Error;

/// Errors that can be raised by any Hunt crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A schema or entity lookup used a name that is not registered.
    #[error("Unknown type '{name}' (known: {known})")]
    UnknownType { name: String, known: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
