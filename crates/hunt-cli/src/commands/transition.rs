use hunt_core::responses::MoveReport;
use hunt_parser::document::move_entry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MoveArgs;
use crate::commands::shared::parse::parse_stage;
use crate::output::{ToMarkdown, output};
use crate::workspace::{Workspace, read_required, write_document};

/// Handle `hunt move`.
///
/// The move is pure text surgery over the document; the file is only
/// rewritten when both the matching entry and the target heading exist, so a
/// failed move leaves it byte-identical.
pub fn handle(args: &MoveArgs, workspace: &Workspace, flags: &GlobalFlags) -> anyhow::Result<()> {
    let to_stage = parse_stage(&args.to)?;
    let path = workspace.pipeline_path(args.path.as_deref());
    let text = read_required(&path)?;

    let updated = move_entry(&text, &args.company, to_stage.heading())?;
    write_document(&path, &updated)?;

    let report = MoveReport {
        term: args.company.clone(),
        to_stage,
    };
    output(&report, flags.format_or(&workspace.config.general.default_format))
}

impl ToMarkdown for MoveReport {
    fn to_markdown(&self) -> String {
        format!("Moved '{}' → {}", self.term, self.to_stage.heading())
    }
}
