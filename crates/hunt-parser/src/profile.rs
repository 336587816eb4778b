//! Profile document parsing.
//!
//! The profile is a two-level document: `## Section` headings over
//! `| Field | Value |` rows or bullets. Each section has a fixed set of
//! label-keyed extraction rules; unmatched sections and lines are ignored,
//! and numeric extraction is best-effort (a malformed cell leaves the field
//! unset rather than failing the parse).

use hunt_core::entities::Profile;
use hunt_core::enums::Currency;
use hunt_core::scoring::first_number;

/// Parse the profile document. Missing or empty input yields the default.
#[must_use]
pub fn parse_profile(text: &str) -> Profile {
    let mut profile = Profile::default();
    let mut section = String::new();

    for raw in text.lines() {
        let line = raw.trim();

        if let Some(heading) = line.strip_prefix("## ") {
            section = heading.trim().to_lowercase();
            continue;
        }

        match section.as_str() {
            "about me" => {
                if profile.name.is_empty() && !line.is_empty() && !line.starts_with("<!--") {
                    profile.name = line.to_string();
                }
            }
            "target" => parse_target_row(line, &mut profile),
            "compensation" => {
                if line.contains("Base floor") && line.contains('|') {
                    if let Some(cell) = value_cell(line) {
                        profile.comp_floor = first_number(&cell);
                        profile.comp_currency = Currency::infer(&cell);
                        profile.comp_floor_text = cell;
                    }
                }
            }
            "preferences" => parse_preference_line(raw, &mut profile),
            "watchlist" => {
                if let Some(company) = line.strip_prefix("- ") {
                    let company = company.trim();
                    if !company.is_empty() {
                        profile.watchlist.push(company.to_lowercase());
                    }
                }
            }
            _ => {}
        }
    }

    profile
}

/// The value cell of a `| Field | Value |` row (third fragment of the split).
fn value_cell(line: &str) -> Option<String> {
    let parts: Vec<&str> = line.split('|').collect();
    (parts.len() >= 3).then(|| parts[2].trim().to_string())
}

fn parse_target_row(line: &str, profile: &mut Profile) {
    if !line.contains('|') {
        return;
    }
    if line.contains("Titles") {
        if let Some(cell) = value_cell(line) {
            profile.titles = split_list(&cell, false);
        }
    } else if line.contains("Industries") {
        if let Some(cell) = value_cell(line) {
            profile.industries = split_list(&cell, true);
        }
    } else if line.contains("Location") {
        if let Some(cell) = value_cell(line) {
            profile.locations = split_list(&cell, true);
        }
    } else if line.contains("Stage") {
        if let Some(cell) = value_cell(line) {
            profile.stage_pref = split_list(&cell, true);
        }
    } else if line.contains("Notice") {
        if let Some(cell) = value_cell(line) {
            profile.notice = cell;
        }
    }
}

fn parse_preference_line(raw: &str, profile: &mut Profile) {
    let line = raw.trim();
    if line.is_empty() || line.starts_with("<!--") {
        return;
    }

    // Passthrough keeps the source line verbatim for the summary document.
    profile.preferences.push(raw.to_string());

    let lower = line.to_lowercase();
    if lower.contains("avoid") {
        let items = line.split_once(':').map_or(line, |(_, rest)| rest);
        profile.avoid = split_list(items, true);
    }
    if lower.contains("optimizing") && profile.optimizing.is_empty() {
        profile.optimizing = line.trim_start_matches(['-', ' ']).trim().to_string();
    }
}

/// Comma-split a cell into trimmed, non-empty items, optionally lower-cased.
fn split_list(cell: &str, lowercase: bool) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty() && *item != "|")
        .map(|item| {
            if lowercase {
                item.to_lowercase()
            } else {
                item.to_string()
            }
        })
        .collect()
}
