//! CLI response types returned as JSON by `hunt` commands.
//!
//! These structs define the shape of `--format json` output for commands like
//! `hunt status`, `hunt briefing`, `hunt analytics`, and `hunt sync`. The
//! markdown renderings in `hunt-cli` are views over the same data.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Opportunity;
use crate::enums::Stage;

/// Count of entries in one stage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StageCount {
    pub stage: Stage,
    pub count: usize,
}

/// One action the searcher should take, tied to a pipeline entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionItem {
    pub stage: Stage,
    pub title: String,
    pub action: String,
}

/// Response from `hunt status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusReport {
    pub total_active: usize,
    /// Non-zero stage counts, in funnel order.
    pub stages: Vec<StageCount>,
    pub actions: Vec<ActionItem>,
}

/// Response from `hunt followups`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FollowupsReport {
    pub followups: Vec<ActionItem>,
}

/// Urgency counters in a briefing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UrgentCounts {
    pub offers_pending: usize,
    pub interviews_upcoming: usize,
    pub followups_needed: usize,
}

/// Response from `hunt briefing`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BriefingReport {
    pub date: NaiveDate,
    pub total_active: usize,
    pub by_stage: Vec<StageCount>,
    pub urgent: UrgentCounts,
    pub actions: Vec<ActionItem>,
    /// Entries sitting in Discovered, ready to research or apply.
    pub discovered: usize,
    pub recommendations: Vec<String>,
    pub entries: Vec<Opportunity>,
}

/// Funnel conversion percentages; 0 when the denominator is 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ConversionRates {
    pub app_to_interview: f64,
    pub interview_to_offer: f64,
    pub app_to_offer: f64,
}

/// One bucket of a distribution (stage reached, source, method).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DistributionEntry {
    pub label: String,
    pub count: usize,
}

/// Response from `hunt analytics`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalyticsReport {
    pub total_applications: usize,
    pub active: usize,
    pub closed: usize,
    pub interviews: usize,
    pub offers: usize,
    pub accepted: usize,
    pub conversion: ConversionRates,
    pub avg_days_active: f64,
    pub stage_distribution: Vec<DistributionEntry>,
    pub source_distribution: Vec<DistributionEntry>,
    pub method_distribution: Vec<DistributionEntry>,
    pub briefings_generated: usize,
    pub recommendations: Vec<String>,
}

/// Response from `hunt sync`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SyncReport {
    pub summary_path: String,
    pub targets: usize,
    pub contacts: usize,
    pub terms: usize,
}

/// Response from `hunt materials`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MaterialsReport {
    pub output: String,
    pub collected: Vec<String>,
    pub missing: Vec<String>,
}

/// Response from `hunt add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AddReport {
    pub role: String,
    pub company: String,
    pub stage: Stage,
}

/// Response from `hunt move`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MoveReport {
    pub term: String,
    pub to_stage: Stage,
}

/// Response from `hunt init`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InitReport {
    pub workspace: String,
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}
