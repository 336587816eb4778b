use std::fmt::Write as _;

use hunt_core::entities::Opportunity;
use hunt_parser::pipeline::parse_pipeline;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::output::{ToMarkdown, output};
use crate::workspace::{Workspace, read_or_empty};

/// Handle `hunt list`.
pub fn handle(args: &ListArgs, workspace: &Workspace, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_or_empty(&workspace.pipeline_path(args.path.as_deref()));
    let entries = parse_pipeline(&text, workspace.location_keywords());
    let dump = EntryDump(entries);
    output(&dump, flags.format_or(&workspace.config.general.default_format))
}

/// All pipeline entries; serializes as a bare array.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct EntryDump(pub Vec<Opportunity>);

impl ToMarkdown for EntryDump {
    fn to_markdown(&self) -> String {
        if self.0.is_empty() {
            return String::from("Pipeline is empty");
        }

        let mut out = String::new();
        for entry in &self.0 {
            let marker = if entry.completed { "x" } else { " " };
            let _ = writeln!(
                out,
                "- [{marker}] [{}] {}",
                entry.stage.heading(),
                entry.title
            );
        }
        out
    }
}
