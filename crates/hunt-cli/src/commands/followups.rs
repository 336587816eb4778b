use std::fmt::Write as _;

use hunt_core::entities::Opportunity;
use hunt_core::enums::Stage;
use hunt_core::responses::{ActionItem, FollowupsReport};
use hunt_parser::pipeline::parse_pipeline;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FollowupsArgs;
use crate::output::{ToMarkdown, output};
use crate::workspace::{Workspace, read_or_empty};

/// Handle `hunt followups`.
pub fn handle(
    args: &FollowupsArgs,
    workspace: &Workspace,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = read_or_empty(&workspace.pipeline_path(args.path.as_deref()));
    let entries = parse_pipeline(&text, workspace.location_keywords());
    let report = build_followups(&entries);
    output(&report, flags.format_or(&workspace.config.general.default_format))
}

/// Collect the follow-ups due, stage by stage.
///
/// Applied entries only qualify once they carry an applied date; screens and
/// interviews always need prep or confirmation; offers need a decision.
pub(crate) fn build_followups(entries: &[Opportunity]) -> FollowupsReport {
    let mut followups = Vec::new();

    for entry in entries {
        let action = match entry.stage {
            Stage::Applied => entry
                .fields
                .dates
                .get("applied")
                .map(|date| format!("Follow up (applied {date})")),
            Stage::PhoneScreen => Some(String::from("Confirm scheduling")),
            Stage::Interview => Some(String::from("Prep needed")),
            Stage::Offer => Some(String::from("Decision needed — review offer")),
            _ => None,
        };

        if let Some(action) = action {
            followups.push(ActionItem {
                stage: entry.stage,
                title: entry.title.clone(),
                action,
            });
        }
    }

    FollowupsReport { followups }
}

impl ToMarkdown for FollowupsReport {
    fn to_markdown(&self) -> String {
        if self.followups.is_empty() {
            return String::from("No follow-ups due");
        }

        let mut out = String::from("Follow-ups due:\n\n");
        for (index, item) in self.followups.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. [{}] {}\n   → {}",
                index + 1,
                item.stage.heading(),
                item.title,
                item.action
            );
        }
        out
    }
}
