//! Generic pipe-table parsing.
//!
//! Turns a semi-structured markdown table into rows keyed by normalized
//! header. The first pipe-bearing line establishes the headers; an
//! all-dashes separator line is skipped; the table ends at the first blank
//! line after the header. Ragged rows are filled with empty strings, extra
//! cells are dropped.

use std::collections::BTreeMap;

/// One data row, keyed by lower-cased, underscore-normalized header.
pub type Row = BTreeMap<String, String>;

/// Parse the first pipe table found in `text`.
///
/// Empty input or input without a header line yields an empty vec. Every
/// returned row carries every header key, short rows padded with `""`.
#[must_use]
pub fn parse_table(text: &str) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut headers: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            if !headers.is_empty() && line.is_empty() {
                break;
            }
            continue;
        }
        if !line.contains('|') {
            continue;
        }

        let cells = split_cells(line);
        if headers.is_empty() {
            if !cells.is_empty() {
                headers = cells.iter().map(|cell| normalize_header(cell)).collect();
            }
            continue;
        }
        if is_separator(line) || cells.is_empty() {
            continue;
        }

        let mut row = Row::new();
        for (index, header) in headers.iter().enumerate() {
            row.insert(header.clone(), cells.get(index).cloned().unwrap_or_default());
        }
        rows.push(row);
    }

    rows
}

/// Split a pipe-delimited line into trimmed, non-empty cells.
///
/// Dropping empty fragments also discards the artifacts of leading and
/// trailing pipes.
#[must_use]
pub fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Lower-case a header and replace spaces with underscores.
#[must_use]
pub fn normalize_header(header: &str) -> String {
    header.to_lowercase().replace(' ', "_")
}

fn is_separator(line: &str) -> bool {
    line.chars().all(|ch| matches!(ch, '-' | '|' | ' '))
}
