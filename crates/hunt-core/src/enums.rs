//! Stage, tier, and currency enums for Hunt.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `Stage` is the closed funnel an opportunity moves through; document headings
//! that match no stage label are ignored by the parsers rather than rejected.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// One position in the opportunity funnel.
///
/// ```text
/// discovered → researching → applied → phone_screen → interview → offer
///                                                              → declined_rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Discovered,
    Researching,
    Applied,
    PhoneScreen,
    Interview,
    Offer,
    DeclinedRejected,
}

impl Stage {
    /// Every stage, in funnel order.
    pub const ALL: [Self; 7] = [
        Self::Discovered,
        Self::Researching,
        Self::Applied,
        Self::PhoneScreen,
        Self::Interview,
        Self::Offer,
        Self::DeclinedRejected,
    ];

    /// Stages that count toward the active pipeline.
    pub const ACTIVE: [Self; 6] = [
        Self::Discovered,
        Self::Researching,
        Self::Applied,
        Self::PhoneScreen,
        Self::Interview,
        Self::Offer,
    ];

    /// The exact heading label used in the pipeline document.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Discovered => "Discovered",
            Self::Researching => "Researching",
            Self::Applied => "Applied",
            Self::PhoneScreen => "Phone Screen",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::DeclinedRejected => "Declined / Rejected",
        }
    }

    /// Resolve a document heading to a stage by exact label equality.
    ///
    /// Unrecognized headings return `None`; entries under them are ignored.
    #[must_use]
    pub fn from_heading(heading: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.heading() == heading)
    }

    /// Whether entries in this stage count as active.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::DeclinedRejected)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discovered => "discovered",
            Self::Researching => "researching",
            Self::Applied => "applied",
            Self::PhoneScreen => "phone_screen",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::DeclinedRejected => "declined_rejected",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MatchTier
// ---------------------------------------------------------------------------

/// Classification of a scored candidate.
///
/// A deal-breaker forces `DealBreaker` regardless of the numeric total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    High,
    Medium,
    Low,
    Poor,
    DealBreaker,
}

impl MatchTier {
    /// Tier for a total score with no deal-breakers.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            75.. => Self::High,
            50..=74 => Self::Medium,
            30..=49 => Self::Low,
            _ => Self::Poor,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Poor => "poor",
            Self::DealBreaker => "deal_breaker",
        }
    }

    /// Human label used in markdown reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Poor => "Poor",
            Self::DealBreaker => "Deal-Breaker",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// Currency inferred from compensation text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
}

impl Currency {
    /// Infer a currency from the glyphs present in `text`.
    ///
    /// `$` is checked first, then `₹`; neither glyph falls back to the INR
    /// default.
    #[must_use]
    pub fn infer(text: &str) -> Self {
        if text.contains('$') {
            Self::Usd
        } else if text.contains('₹') {
            Self::Inr
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inr => "inr",
            Self::Usd => "usd",
        }
    }

    /// ISO-ish code used in reports.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
