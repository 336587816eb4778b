use chrono::Local;
use hunt_core::responses::AddReport;
use hunt_parser::document::insert_under_heading;
use hunt_parser::pipeline::build_entry_line;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::parse::parse_stage;
use crate::output::{ToMarkdown, output};
use crate::workspace::{Workspace, read_required, write_document};

/// Handle `hunt add`.
///
/// The pipeline document must exist and carry the target stage heading; on
/// any failure nothing is written.
pub fn handle(args: &AddArgs, workspace: &Workspace, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stage = parse_stage(&args.stage)?;
    let path = workspace.pipeline_path(args.path.as_deref());
    let text = read_required(&path)?;

    let found = Local::now().format("%b %d").to_string();
    let entry = build_entry_line(
        &args.role,
        &args.company,
        args.comp.as_deref(),
        args.location.as_deref(),
        args.url.as_deref(),
        args.notes.as_deref(),
        &found,
    );

    let updated = insert_under_heading(&text, stage.heading(), &entry)?;
    write_document(&path, &updated)?;

    let report = AddReport {
        role: args.role.clone(),
        company: args.company.clone(),
        stage,
    };
    output(&report, flags.format_or(&workspace.config.general.default_format))
}

impl ToMarkdown for AddReport {
    fn to_markdown(&self) -> String {
        format!(
            "Added: {} — {} → {}",
            self.role,
            self.company,
            self.stage.heading()
        )
    }
}

#[cfg(test)]
mod tests {
    use hunt_core::enums::Stage;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn markdown_reports_the_transition() {
        let report = AddReport {
            role: String::from("Senior PM"),
            company: String::from("Acme"),
            stage: Stage::Discovered,
        };
        assert_eq!(report.to_markdown(), "Added: Senior PM — Acme → Discovered");
    }
}
