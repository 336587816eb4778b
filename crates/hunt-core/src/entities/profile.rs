use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Currency;

/// The searcher's preferences and targets, reconstructed on every read from
/// the profile document. One instance per workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Profile {
    /// Searcher identity line from the About Me section.
    pub name: String,
    /// Target titles, original casing (matched case-insensitively).
    pub titles: Vec<String>,
    /// Target industries, lower-cased.
    pub industries: Vec<String>,
    /// Acceptable locations, lower-cased.
    pub locations: Vec<String>,
    /// Preferred company stages (e.g. "series b"), lower-cased.
    pub stage_pref: Vec<String>,
    /// Notice period text, verbatim.
    pub notice: String,
    /// Compensation floor as the first numeric token of the Base floor cell.
    pub comp_floor: Option<f64>,
    /// The Base floor cell verbatim, for display in the summary document.
    pub comp_floor_text: String,
    pub comp_currency: Currency,
    /// Terms that disqualify a company or industry, lower-cased.
    pub avoid: Vec<String>,
    /// Companies of special interest, lower-cased.
    pub watchlist: Vec<String>,
    /// The "optimizing for" preference bullet, verbatim.
    pub optimizing: String,
    /// Raw preference lines, passed through to the summary document.
    pub preferences: Vec<String>,
}

impl Profile {
    /// A profile with no targets scores every candidate as Poor; this is the
    /// cheap way to tell whether intake has happened.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.name.is_empty() || !self.titles.is_empty() || self.comp_floor.is_some()
    }
}
