//! Pure line surgery over pipeline documents.
//!
//! Both mutators (add and move) are expressed as functions from document
//! text to new document text, so the edit logic is testable without file
//! I/O, and a failed edit can never leave a partially-written document —
//! callers only write the returned text on success.

use crate::error::DocumentError;

/// Insert `entry` as the first line under `## <heading>`.
///
/// `entry` may span multiple lines (an entry with a notes sub-bullet).
///
/// # Errors
///
/// [`DocumentError::HeadingNotFound`] when no line equals the heading; the
/// input is returned untouched in spirit — the caller received no output to
/// write.
pub fn insert_under_heading(
    text: &str,
    heading: &str,
    entry: &str,
) -> Result<String, DocumentError> {
    let target = format!("## {heading}");
    let mut lines: Vec<&str> = text.split('\n').collect();

    let position = lines
        .iter()
        .position(|line| line.trim() == target)
        .ok_or_else(|| DocumentError::HeadingNotFound {
            heading: heading.to_string(),
        })?;

    lines.insert(position + 1, entry);
    Ok(lines.join("\n"))
}

/// Remove the first entry line containing `term`, case-insensitively.
///
/// Only checkbox entry lines are candidates. Returns the new document and
/// the removed line, indentation intact.
///
/// # Errors
///
/// [`DocumentError::NoMatch`] when no entry line contains the term.
pub fn remove_first_match(text: &str, term: &str) -> Result<(String, String), DocumentError> {
    let needle = term.to_lowercase();
    let mut lines: Vec<&str> = text.split('\n').collect();

    let position = lines
        .iter()
        .position(|line| {
            line.to_lowercase().contains(&needle) && line.trim().starts_with("- [")
        })
        .ok_or_else(|| DocumentError::NoMatch {
            term: term.to_string(),
        })?;

    let removed = lines.remove(position).to_string();
    Ok((lines.join("\n"), removed))
}

/// Move the first entry matching `term` under `## <to_heading>`.
///
/// # Errors
///
/// [`DocumentError::NoMatch`] when nothing matches the term,
/// [`DocumentError::HeadingNotFound`] when the target heading is absent. In
/// both cases no output document is produced, so the source stays
/// byte-identical.
pub fn move_entry(text: &str, term: &str, to_heading: &str) -> Result<String, DocumentError> {
    let (without, line) = remove_first_match(text, term)?;
    insert_under_heading(&without, to_heading, &line)
}
