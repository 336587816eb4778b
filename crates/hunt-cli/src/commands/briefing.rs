use std::fmt::Write as _;

use chrono::{Local, NaiveDate};
use hunt_core::entities::Opportunity;
use hunt_core::enums::Stage;
use hunt_core::responses::{ActionItem, BriefingReport, StageCount, UrgentCounts};
use hunt_parser::pipeline::parse_pipeline;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BriefingArgs;
use crate::output::{ToMarkdown, output};
use crate::workspace::{Workspace, read_or_empty};

/// Handle `hunt briefing`.
pub fn handle(
    args: &BriefingArgs,
    workspace: &Workspace,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = read_or_empty(&workspace.pipeline_path(args.path.as_deref()));
    let entries = parse_pipeline(&text, workspace.location_keywords());
    let report = build_briefing(entries, Local::now().date_naive());
    output(&report, flags.format_or(&workspace.config.general.default_format))
}

/// Build the briefing from parsed entries; the date is injected for
/// deterministic tests.
pub(crate) fn build_briefing(entries: Vec<Opportunity>, date: NaiveDate) -> BriefingReport {
    let total_active = entries.iter().filter(|entry| entry.stage.is_active()).count();

    let count_of = |stage: Stage| entries.iter().filter(|entry| entry.stage == stage).count();
    let by_stage = Stage::ALL
        .into_iter()
        .filter_map(|stage| {
            let count = count_of(stage);
            (count > 0).then_some(StageCount { stage, count })
        })
        .collect();

    let urgent = UrgentCounts {
        offers_pending: count_of(Stage::Offer),
        interviews_upcoming: count_of(Stage::Interview),
        followups_needed: count_of(Stage::Applied),
    };
    let discovered = count_of(Stage::Discovered);

    // Action order mirrors urgency: offers, interviews, screens, follow-ups.
    let mut actions = Vec::new();
    for (stage, action) in [
        (Stage::Offer, "OFFER PENDING — decision needed"),
        (Stage::Interview, "INTERVIEW — prep if not done"),
        (Stage::PhoneScreen, "PHONE SCREEN — review company basics"),
        (Stage::Applied, "FOLLOW UP — check for response"),
    ] {
        for entry in entries.iter().filter(|entry| entry.stage == stage) {
            actions.push(ActionItem {
                stage,
                title: entry.title.clone(),
                action: String::from(action),
            });
        }
    }

    let mut recommendations = Vec::new();
    if total_active < 5 {
        recommendations.push(String::from(
            "Pipeline is thin. Discover more matching roles.",
        ));
    }
    if discovered > 5 {
        recommendations.push(String::from(
            "You have many undecided roles. Research and apply to narrow the funnel.",
        ));
    }
    if urgent.offers_pending == 0 && urgent.interviews_upcoming == 0 && urgent.followups_needed > 5
    {
        recommendations.push(String::from(
            "Many applications, few callbacks. Consider adjusting your resume or trying direct outreach.",
        ));
    }
    if urgent.offers_pending > 0 {
        recommendations.push(String::from(
            "You have a pending offer. Prepare a negotiation plan before responding.",
        ));
    }

    BriefingReport {
        date,
        total_active,
        by_stage,
        urgent,
        actions,
        discovered,
        recommendations,
        entries,
    }
}

impl ToMarkdown for BriefingReport {
    fn to_markdown(&self) -> String {
        let mut out = format!(
            "# Job Search Briefing — {}\n\n## Pipeline Summary\n\n**{} active opportunities**\n\n",
            self.date.format("%B %d, %Y"),
            self.total_active
        );

        for StageCount { stage, count } in &self.by_stage {
            let _ = writeln!(out, "- **{}:** {count}", stage.heading());
        }

        out.push_str("\n## Action Items\n\n");
        if self.actions.is_empty() {
            out.push_str("No urgent actions — pipeline is on track.\n");
        } else {
            for (index, item) in self.actions.iter().enumerate() {
                let _ = writeln!(out, "{}. **{}:** {}", index + 1, item.action, item.title);
            }
        }

        if self.discovered > 0 {
            let _ = writeln!(
                out,
                "\n**{} roles discovered** — ready to research or apply",
                self.discovered
            );
        }

        if !self.recommendations.is_empty() {
            out.push_str("\n## Recommendations\n\n");
            for recommendation in &self.recommendations {
                let _ = writeln!(out, "- {recommendation}");
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use hunt_core::entities::OpportunityFields;
    use pretty_assertions::assert_eq;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn entry(title: &str, stage: Stage) -> Opportunity {
        Opportunity {
            title: title.to_string(),
            stage,
            completed: false,
            fields: OpportunityFields::default(),
            raw: String::new(),
        }
    }

    #[test]
    fn urgent_counts_follow_stages() {
        let entries = vec![
            entry("A — V", Stage::Offer),
            entry("B — W", Stage::Interview),
            entry("C — X", Stage::Interview),
            entry("D — Y", Stage::Applied),
        ];
        let report = build_briefing(entries, date());
        assert_eq!(report.urgent.offers_pending, 1);
        assert_eq!(report.urgent.interviews_upcoming, 2);
        assert_eq!(report.urgent.followups_needed, 1);
    }

    #[test]
    fn actions_order_offers_first() {
        let entries = vec![
            entry("D — Y", Stage::Applied),
            entry("A — V", Stage::Offer),
            entry("B — W", Stage::PhoneScreen),
        ];
        let report = build_briefing(entries, date());
        let order: Vec<Stage> = report.actions.iter().map(|item| item.stage).collect();
        assert_eq!(order, vec![Stage::Offer, Stage::PhoneScreen, Stage::Applied]);
    }

    #[test]
    fn thin_pipeline_recommends_discovery() {
        let report = build_briefing(vec![entry("A — V", Stage::Applied)], date());
        assert!(
            report
                .recommendations
                .iter()
                .any(|line| line.contains("Pipeline is thin"))
        );
    }

    #[test]
    fn pending_offer_recommends_negotiation() {
        let report = build_briefing(vec![entry("A — V", Stage::Offer)], date());
        assert!(
            report
                .recommendations
                .iter()
                .any(|line| line.contains("negotiation"))
        );
    }

    #[test]
    fn many_applications_without_callbacks_triggers_resume_advice() {
        let entries = (0..6)
            .map(|i| entry(&format!("R{i} — C{i}"), Stage::Applied))
            .collect();
        let report = build_briefing(entries, date());
        assert!(
            report
                .recommendations
                .iter()
                .any(|line| line.contains("few callbacks"))
        );
    }

    #[test]
    fn markdown_contains_header_and_counts() {
        let report = build_briefing(vec![entry("A — V", Stage::Interview)], date());
        let md = report.to_markdown();
        assert!(md.starts_with("# Job Search Briefing — August 07, 2026"));
        assert!(md.contains("**1 active opportunities**"));
        assert!(md.contains("- **Interview:** 1"));
        assert!(md.contains("1. **INTERVIEW — prep if not done:** A — V"));
    }

    #[test]
    fn quiet_pipeline_reports_on_track() {
        let report = build_briefing(Vec::new(), date());
        assert!(report.to_markdown().contains("No urgent actions"));
    }
}
