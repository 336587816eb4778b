use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Stage;

/// One tracked opportunity line in the pipeline document.
///
/// Identity is positional — an opportunity has no ID beyond its place in the
/// source document, and moving it between stage headings is the only
/// lifecycle transition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Opportunity {
    /// Display title, usually "Role — Company" from the bold span.
    pub title: String,
    pub stage: Stage,
    /// Checked-box marker present on the source line.
    pub completed: bool,
    pub fields: OpportunityFields,
    /// The verbatim source line, kept for text surgery and export.
    pub raw: String,
}

impl Opportunity {
    /// Split the "Role — Company" title; company falls back to "Unknown".
    #[must_use]
    pub fn role_and_company(&self) -> (String, String) {
        match self.title.split_once(" — ") {
            Some((role, company)) => (role.trim().to_string(), company.trim().to_string()),
            None => (self.title.clone(), String::from("Unknown")),
        }
    }
}

/// Classified pipe-delimited segments of an opportunity line.
///
/// Every field is best-effort: unclassifiable segments land in `extra`, and a
/// second unclassified segment on the same line overwrites the first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OpportunityFields {
    pub comp: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    /// Labeled date segments (`Found:`, `Applied:`, `Scheduled:`), keyed by
    /// the lower-cased label.
    #[serde(default)]
    pub dates: BTreeMap<String, String>,
    pub followup: Option<String>,
    pub extra: Option<String>,
}

impl OpportunityFields {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comp.is_none()
            && self.location.is_none()
            && self.url.is_none()
            && self.dates.is_empty()
            && self.followup.is_none()
            && self.extra.is_none()
    }
}
