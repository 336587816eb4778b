use hunt_core::entities::{ActiveTarget, Contact, Opportunity, Profile, Term};
use hunt_core::errors::CoreError;
use hunt_core::responses::{
    AddReport, AnalyticsReport, BriefingReport, FollowupsReport, InitReport, MaterialsReport,
    MoveReport, StatusReport, SyncReport,
};
use hunt_core::scoring::{Candidate, MatchReport};
use schemars::{Schema, schema_for};

use crate::cli::root_commands::SchemaArgs;

const KNOWN_TYPES: [&str; 16] = [
    "opportunity",
    "profile",
    "contact",
    "term",
    "active_target",
    "candidate",
    "match_report",
    "status_report",
    "followups_report",
    "briefing_report",
    "analytics_report",
    "sync_report",
    "materials_report",
    "add_report",
    "move_report",
    "init_report",
];

/// Handle `hunt schema`. Always emits JSON, whatever the format flag says.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    let schema = lookup(&args.type_name)?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn lookup(type_name: &str) -> Result<Schema, CoreError> {
    let normalized = type_name.trim().to_lowercase().replace('-', "_");
    let schema = match normalized.as_str() {
        "opportunity" => schema_for!(Opportunity),
        "profile" => schema_for!(Profile),
        "contact" => schema_for!(Contact),
        "term" => schema_for!(Term),
        "active_target" => schema_for!(ActiveTarget),
        "candidate" => schema_for!(Candidate),
        "match_report" => schema_for!(MatchReport),
        "status_report" => schema_for!(StatusReport),
        "followups_report" => schema_for!(FollowupsReport),
        "briefing_report" => schema_for!(BriefingReport),
        "analytics_report" => schema_for!(AnalyticsReport),
        "sync_report" => schema_for!(SyncReport),
        "materials_report" => schema_for!(MaterialsReport),
        "add_report" => schema_for!(AddReport),
        "move_report" => schema_for!(MoveReport),
        "init_report" => schema_for!(InitReport),
        _ => {
            return Err(CoreError::UnknownType {
                name: type_name.to_string(),
                known: KNOWN_TYPES.join(", "),
            });
        }
    };
    Ok(schema)
}
