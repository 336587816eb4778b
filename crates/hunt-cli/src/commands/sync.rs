use std::fmt::Write as _;

use chrono::{Local, NaiveDate};
use hunt_core::entities::{ActiveTarget, Contact, Profile, Term};
use hunt_core::responses::SyncReport;
use hunt_parser::glossary::{parse_contacts, parse_terms};
use hunt_parser::pipeline::{active_targets, parse_pipeline};
use hunt_parser::profile::parse_profile;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SyncArgs;
use crate::output::{ToMarkdown, output};
use crate::workspace::{Workspace, read_or_empty, write_document};

/// Row caps for the regenerated summary sections.
const MAX_TARGETS: usize = 15;
const MAX_CONTACTS: usize = 15;
const MAX_TERMS: usize = 20;

/// Everything the summary is built from.
pub(crate) struct SummarySources {
    pub profile: Profile,
    pub targets: Vec<ActiveTarget>,
    pub contacts: Vec<Contact>,
    pub terms: Vec<Term>,
}

/// Handle `hunt sync`.
///
/// Reads every source-of-truth document and fully overwrites the summary.
/// Missing sources read as empty and produce empty sections, never a
/// failure.
pub fn handle(args: &SyncArgs, workspace: &Workspace, flags: &GlobalFlags) -> anyhow::Result<()> {
    let overridden;
    let workspace = match &args.workspace {
        Some(root) => {
            overridden = Workspace::resolve(Some(root))?;
            &overridden
        }
        None => workspace,
    };

    let pipeline_text = read_or_empty(&workspace.pipeline_path(None));
    let glossary_text = read_or_empty(&workspace.glossary_path());

    let entries = parse_pipeline(&pipeline_text, workspace.location_keywords());
    let sources = SummarySources {
        profile: parse_profile(&read_or_empty(&workspace.profile_path(None))),
        targets: active_targets(&entries),
        contacts: parse_contacts(&glossary_text),
        terms: parse_terms(&glossary_text),
    };

    let summary_path = workspace.summary_path();
    let summary = build_summary(&sources, Local::now().date_naive());
    write_document(&summary_path, &summary)?;

    let report = SyncReport {
        summary_path: summary_path.display().to_string(),
        targets: sources.targets.len(),
        contacts: sources.contacts.len(),
        terms: sources.terms.len(),
    };
    output(&report, flags.format_or(&workspace.config.general.default_format))
}

/// Render the replacement summary document.
///
/// Section order is fixed and row counts are capped; truncation keeps the
/// earliest-parsed rows. Deterministic for a given set of sources and date,
/// which makes the rebuild idempotent.
pub(crate) fn build_summary(sources: &SummarySources, date: NaiveDate) -> String {
    let mut out = format!(
        "# Job Search Memory\n\n> Last updated: {}\n\n## Searcher\n",
        date.format("%B %d, %Y")
    );

    let profile = &sources.profile;
    if profile.name.is_empty() {
        out.push_str("<!-- Fill the profile document, then re-run hunt sync -->\n");
    } else {
        out.push_str(&profile.name);
        out.push('\n');
        let mut extras = Vec::new();
        if !profile.comp_floor_text.is_empty() {
            extras.push(format!("Floor: {}", profile.comp_floor_text));
        }
        if !profile.notice.is_empty() {
            extras.push(format!("Notice: {}", profile.notice));
        }
        if !profile.optimizing.is_empty() {
            extras.push(profile.optimizing.clone());
        }
        if !extras.is_empty() {
            out.push_str(&extras.join(" | "));
            out.push('\n');
        }
    }

    out.push_str(
        "\n## Active Targets\n| Company | Role | Stage | Next Action | Deadline |\n\
         |---------|------|-------|-------------|----------|\n",
    );
    for target in sources.targets.iter().take(MAX_TARGETS) {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            target.company,
            target.role,
            target.stage.heading(),
            target.next_action,
            target.deadline
        );
    }

    out.push_str(
        "\n## Key Contacts\n| Who | At | Role | Last Contact | Notes |\n\
         |-----|-----|------|-------------|-------|\n",
    );
    for contact in sources.contacts.iter().take(MAX_CONTACTS) {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            contact.name, contact.company, contact.role, contact.last_contact, contact.notes
        );
    }

    out.push_str("\n## Quick Reference\n| Term | Meaning |\n|------|---------|\n");
    for term in sources.terms.iter().take(MAX_TERMS) {
        let _ = writeln!(out, "| {} | {} |", term.term, term.meaning);
    }

    out.push_str("\n## Preferences\n");
    if profile.preferences.is_empty() {
        out.push_str("<!-- Filled during profile intake -->\n");
    } else {
        for line in &profile.preferences {
            out.push_str(line);
            out.push('\n');
        }
    }

    out
}

impl ToMarkdown for SyncReport {
    fn to_markdown(&self) -> String {
        format!(
            "{} rebuilt\n  Active targets: {}\n  Contacts: {}\n  Terms: {}",
            self.summary_path, self.targets, self.contacts, self.terms
        )
    }
}

#[cfg(test)]
mod tests {
    use hunt_core::enums::Stage;
    use pretty_assertions::assert_eq;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn target(company: &str) -> ActiveTarget {
        ActiveTarget {
            company: company.to_string(),
            role: String::from("PM"),
            stage: Stage::Applied,
            next_action: String::from("—"),
            deadline: String::from("—"),
        }
    }

    fn contact(name: &str) -> Contact {
        Contact {
            name: name.to_string(),
            company: String::from("Acme"),
            role: String::from("EM"),
            last_contact: String::from("—"),
            notes: String::new(),
        }
    }

    fn term(name: &str) -> Term {
        Term {
            term: name.to_string(),
            meaning: String::from("meaning"),
        }
    }

    fn sources() -> SummarySources {
        SummarySources {
            profile: Profile {
                name: String::from("Priya Sharma, Senior PM"),
                notice: String::from("60 days"),
                comp_floor_text: String::from("₹40L"),
                optimizing: String::from("Optimizing for growth"),
                preferences: vec![String::from("- Optimizing for growth")],
                ..Profile::default()
            },
            targets: vec![target("Acme")],
            contacts: vec![contact("Rohan")],
            terms: vec![term("CTC")],
        }
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let summary = build_summary(&sources(), date());
        let positions: Vec<usize> = [
            "# Job Search Memory",
            "## Searcher",
            "## Active Targets",
            "## Key Contacts",
            "## Quick Reference",
            "## Preferences",
        ]
        .iter()
        .map(|section| summary.find(section).expect("section present"))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn searcher_line_joins_floor_notice_and_optimizing() {
        let summary = build_summary(&sources(), date());
        assert!(summary.contains("Priya Sharma, Senior PM\n"));
        assert!(summary.contains("Floor: ₹40L | Notice: 60 days | Optimizing for growth"));
    }

    #[test]
    fn empty_profile_leaves_a_placeholder() {
        let mut sources = sources();
        sources.profile = Profile::default();
        let summary = build_summary(&sources, date());
        assert!(summary.contains("<!-- Fill the profile document, then re-run hunt sync -->"));
        assert!(summary.contains("<!-- Filled during profile intake -->"));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let sources = sources();
        let first = build_summary(&sources, date());
        let second = build_summary(&sources, date());
        assert_eq!(first, second);
    }

    #[test]
    fn row_caps_hold_regardless_of_source_size() {
        let sources = SummarySources {
            profile: Profile::default(),
            targets: (0..40).map(|i| target(&format!("C{i}"))).collect(),
            contacts: (0..40).map(|i| contact(&format!("N{i}"))).collect(),
            terms: (0..40).map(|i| term(&format!("T{i}"))).collect(),
        };
        let summary = build_summary(&sources, date());

        let rows_under = |heading: &str| {
            let start = summary.find(heading).unwrap();
            let section = &summary[start..];
            let end = section[2..].find("\n## ").map_or(section.len(), |i| i + 2);
            section[..end]
                .lines()
                .filter(|line| line.starts_with("| ") && !line.starts_with("| Term")
                    && !line.starts_with("| Company") && !line.starts_with("| Who"))
                .count()
        };

        assert_eq!(rows_under("## Active Targets"), 15);
        assert_eq!(rows_under("## Key Contacts"), 15);
        assert_eq!(rows_under("## Quick Reference"), 20);
    }

    #[test]
    fn truncation_keeps_earliest_rows() {
        let sources = SummarySources {
            profile: Profile::default(),
            targets: (0..20).map(|i| target(&format!("C{i}"))).collect(),
            contacts: Vec::new(),
            terms: Vec::new(),
        };
        let summary = build_summary(&sources, date());
        assert!(summary.contains("| C0 |"));
        assert!(summary.contains("| C14 |"));
        assert!(!summary.contains("| C15 |"));
    }

    #[test]
    fn timestamp_uses_long_month_format() {
        let summary = build_summary(&sources(), date());
        assert!(summary.contains("> Last updated: August 07, 2026"));
    }
}
