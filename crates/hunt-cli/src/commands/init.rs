use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use hunt_core::enums::Stage;
use hunt_core::responses::InitReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::{ToMarkdown, output};
use crate::workspace::Workspace;

const PROFILE_TEMPLATE: &str = "\
# Job Search Profile

## About Me
<!-- Name, current role, years of experience -->

## Target
| Field | Value |
|-------|-------|
| Titles | |
| Industries | |
| Stage | |
| Location | |
| Notice period | |

## Compensation
| Field | Value |
|-------|-------|
| Base floor | |
| Target total comp | |
| Must-haves | |
| Nice-to-haves | |

## Preferences
<!-- What you're optimizing for, culture signals, red flags to avoid -->

## Watchlist
<!-- Companies you're especially interested in -->

## Resume
<!-- Path to your resume file -->
";

const GLOSSARY_TEMPLATE: &str = "\
# Job Search Glossary

## Companies
| Company | Industry | Stage | In Pipeline | Notes |
|---------|----------|-------|-------------|-------|

## Contacts
| Name | Company | Role | Relationship | Last Contact |
|------|---------|------|-------------|-------------|

## Terms
| Term | Meaning |
|------|---------|
| CTC | Cost to Company (Indian total compensation) |
| ESOP | Employee Stock Option Plan |
| RSU | Restricted Stock Unit |
| ATS | Applicant Tracking System |
| JD | Job Description |
| HM | Hiring Manager |
| R1/R2/R3 | Interview round 1/2/3 |
| LPA | Lakhs Per Annum |
";

const APPLICATIONS_TEMPLATE: &str = "\
# Application Tracker

| Date | Company | Role | Source | Method | Stage Reached | Outcome | Days Active |
|------|---------|------|--------|--------|--------------|---------|-------------|

## Stats
- Total applications: 0
- Active: 0
- Interview conversion: —
- Average response time: —
";

const INTERVIEWS_TEMPLATE: &str = "\
# Interview Tracker

| Date | Company | Role | Round | Format | Result | Learnings |
|------|---------|------|-------|--------|--------|-----------|

## Stats
- Total interviews: 0
- Pass rate: —
- Average rounds per company: —
";

const OFFERS_TEMPLATE: &str = "\
# Offer Tracker

| Date | Company | Role | Base | Total Comp | Equity | Decision | Notes |
|------|---------|------|------|-----------|--------|----------|-------|

## Stats
- Total offers: 0
- Average offer: —
- Accepted: 0
";

const BRIEFINGS_TEMPLATE: &str = "\
# Briefing Log

| Date | Active Pipeline | New This Week | Interviews | Offers | Actions Taken |
|------|----------------|---------------|------------|--------|---------------|
";

/// Handle `hunt init`.
///
/// Scaffolds every workspace document and memory directory; existing files
/// are skipped, never overwritten.
pub fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = args
        .workspace
        .as_ref()
        .or(flags.workspace.as_ref())
        .map_or_else(
            || std::env::current_dir().context("failed to read current directory"),
            |path| Ok(PathBuf::from(path)),
        )?;
    fs::create_dir_all(&root).with_context(|| format!("cannot create '{}'", root.display()))?;

    let workspace = Workspace::at(root)?;
    let documents = &workspace.config.documents;

    let mut created = Vec::new();
    let mut skipped = Vec::new();

    // Memory directories first, so the analytics templates land in a
    // directory this run gets credit for creating.
    for dir in ["companies", "contacts", "applications", "analytics"] {
        let path = workspace.memory_dir().join(dir);
        let label = format!("{}/", relative_label(&workspace.root, &path));
        if path.is_dir() {
            skipped.push(label);
        } else {
            fs::create_dir_all(&path)
                .with_context(|| format!("cannot create '{}'", path.display()))?;
            created.push(label);
        }
    }

    let files = [
        (
            workspace.root.join(&documents.pipeline),
            pipeline_template(),
        ),
        (workspace.root.join(&documents.profile), PROFILE_TEMPLATE.to_string()),
        (workspace.summary_path(), summary_template()),
        (workspace.glossary_path(), GLOSSARY_TEMPLATE.to_string()),
        (
            workspace.analytics_dir().join("applications.md"),
            APPLICATIONS_TEMPLATE.to_string(),
        ),
        (
            workspace.analytics_dir().join("interviews.md"),
            INTERVIEWS_TEMPLATE.to_string(),
        ),
        (
            workspace.analytics_dir().join("offers.md"),
            OFFERS_TEMPLATE.to_string(),
        ),
        (
            workspace.analytics_dir().join("briefings.md"),
            BRIEFINGS_TEMPLATE.to_string(),
        ),
    ];
    for (path, content) in files {
        scaffold_file(&workspace.root, &path, &content, &mut created, &mut skipped)?;
    }

    let report = InitReport {
        workspace: workspace.root.display().to_string(),
        created,
        skipped,
    };
    output(&report, flags.format_or(&workspace.config.general.default_format))
}

/// Stage headings in funnel order, each with an empty section.
fn pipeline_template() -> String {
    let mut out = String::from("# Job Search Pipeline\n");
    for stage in Stage::ALL {
        let _ = write!(out, "\n## {}\n", stage.heading());
    }
    out
}

/// Hot-cache skeleton: empty capped tables plus seed reference terms.
fn summary_template() -> String {
    format!(
        "# Job Search Memory\n\n> Last updated: {}\n\n## Searcher\n\
         <!-- Fill the profile document, then run hunt sync -->\n\n\
         ## Active Targets\n| Company | Role | Stage | Next Action | Deadline |\n\
         |---------|------|-------|-------------|----------|\n\n\
         ## Key Contacts\n| Who | At | Role | Last Contact | Notes |\n\
         |-----|-----|------|-------------|-------|\n\n\
         ## Quick Reference\n| Term | Meaning |\n|------|---------|\n\
         | CTC | Cost to Company (Indian total comp) |\n\
         | ESOP | Employee Stock Option Plan |\n\
         | ATS | Applicant Tracking System |\n\
         | JD | Job Description |\n\
         | HM | Hiring Manager |\n\n\
         ## Preferences\n<!-- Filled during profile intake -->\n",
        Local::now().format("%B %d, %Y")
    )
}

fn scaffold_file(
    root: &Path,
    path: &Path,
    content: &str,
    created: &mut Vec<String>,
    skipped: &mut Vec<String>,
) -> anyhow::Result<()> {
    let label = relative_label(root, path);
    if path.is_file() {
        skipped.push(format!("{label} (already exists)"));
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create '{}'", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("cannot write '{}'", path.display()))?;
    created.push(label);
    Ok(())
}

fn relative_label(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

impl ToMarkdown for InitReport {
    fn to_markdown(&self) -> String {
        let mut out = format!("Job search workspace initialized\nLocation: {}\n", self.workspace);
        if !self.created.is_empty() {
            out.push_str("\nCreated:\n");
            for item in &self.created {
                let _ = writeln!(out, "  + {item}");
            }
        }
        if !self.skipped.is_empty() {
            out.push_str("\nSkipped:\n");
            for item in &self.skipped {
                let _ = writeln!(out, "  ~ {item}");
            }
        }
        out.push_str("\nNext: fill the profile document, then run 'hunt sync'\n");
        out
    }
}
