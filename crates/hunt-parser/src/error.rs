//! Document editing error types for hunt-parser.

/// Errors raised by targeted document edits.
///
/// Pure parsing never fails — malformed rows and fields degrade to empty
/// values — so only the edit operations carry errors.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The stage or section heading the edit targets is absent.
    #[error("Heading '## {heading}' not found in document")]
    HeadingNotFound { heading: String },

    /// No entry line matched the search term.
    #[error("No entry matching '{term}' found")]
    NoMatch { term: String },
}
