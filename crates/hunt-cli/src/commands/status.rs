use std::fmt::Write as _;

use hunt_core::entities::Opportunity;
use hunt_core::enums::Stage;
use hunt_core::responses::{ActionItem, StageCount, StatusReport};
use hunt_parser::pipeline::parse_pipeline;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatusArgs;
use crate::output::{ToMarkdown, output};
use crate::workspace::{Workspace, read_or_empty};

/// Handle `hunt status`.
pub fn handle(args: &StatusArgs, workspace: &Workspace, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_or_empty(&workspace.pipeline_path(args.path.as_deref()));
    let entries = parse_pipeline(&text, workspace.location_keywords());
    let report = build_status(&entries);
    output(&report, flags.format_or(&workspace.config.general.default_format))
}

/// Aggregate entries into the status report.
pub(crate) fn build_status(entries: &[Opportunity]) -> StatusReport {
    let total_active = entries.iter().filter(|entry| entry.stage.is_active()).count();

    let stages = Stage::ALL
        .into_iter()
        .filter_map(|stage| {
            let count = entries.iter().filter(|entry| entry.stage == stage).count();
            (count > 0).then_some(StageCount { stage, count })
        })
        .collect();

    let mut actions = Vec::new();
    for entry in entries {
        if entry.stage == Stage::Offer {
            actions.push(ActionItem {
                stage: entry.stage,
                title: entry.title.clone(),
                action: String::from("offer pending — decision needed"),
            });
        }
        if let Some(note) = &entry.fields.followup {
            actions.push(ActionItem {
                stage: entry.stage,
                title: entry.title.clone(),
                action: format!("follow up ({note})"),
            });
        }
    }

    StatusReport {
        total_active,
        stages,
        actions,
    }
}

impl ToMarkdown for StatusReport {
    fn to_markdown(&self) -> String {
        let mut out = format!("Pipeline: {} active opportunities\n", self.total_active);

        for StageCount { stage, count } in &self.stages {
            let _ = writeln!(out, "- {}: {count}", stage.heading());
        }

        out.push_str("\nAction needed:\n");
        if self.actions.is_empty() {
            out.push_str("- None — pipeline is on track\n");
        } else {
            for (index, item) in self.actions.iter().enumerate() {
                let _ = writeln!(out, "{}. {} — {}", index + 1, item.title, item.action);
            }
        }

        out
    }
}
