//! Glossary document parsing.
//!
//! The glossary carries a "## Contacts" and a "## Terms" section, each a pipe
//! table. A data row whose first cell equals the table's header label
//! ("Name" / "Term") is skipped unconditionally — that is how the header row
//! is kept out of the data.

use hunt_core::entities::{Contact, Term};

use crate::table::split_cells;

/// Parse the Contacts section into contact records.
///
/// Rows need at least name, company, and role; the last-contact cell falls
/// back to "—" and notes to empty.
#[must_use]
pub fn parse_contacts(text: &str) -> Vec<Contact> {
    section_lines(text, "## Contacts")
        .into_iter()
        .filter_map(|line| {
            let cells = split_cells(line);
            if is_separator(line) || cells.len() < 3 || cells[0] == "Name" {
                return None;
            }
            Some(Contact {
                name: cells[0].clone(),
                company: cells[1].clone(),
                role: cells[2].clone(),
                last_contact: cells.get(3).cloned().unwrap_or_else(|| String::from("—")),
                notes: cells.get(4).cloned().unwrap_or_default(),
            })
        })
        .collect()
}

/// Parse the Terms section into term/meaning pairs.
#[must_use]
pub fn parse_terms(text: &str) -> Vec<Term> {
    section_lines(text, "## Terms")
        .into_iter()
        .filter_map(|line| {
            let cells = split_cells(line);
            if is_separator(line) || cells.len() < 2 || cells[0] == "Term" {
                return None;
            }
            Some(Term {
                term: cells[0].clone(),
                meaning: cells[1].clone(),
            })
        })
        .collect()
}

/// Pipe-bearing lines between `heading` and the next `## ` heading.
fn section_lines<'a>(text: &'a str, heading: &str) -> Vec<&'a str> {
    let mut lines = Vec::new();
    let mut in_section = false;
    for line in text.lines() {
        if line.contains(heading) {
            in_section = true;
            continue;
        }
        if in_section && line.starts_with("## ") {
            break;
        }
        if in_section && line.contains('|') {
            lines.push(line);
        }
    }
    lines
}

fn is_separator(line: &str) -> bool {
    line.trim().starts_with("|--")
}
