use std::fmt::Write as _;

use hunt_core::scoring::{Candidate, MatchReport, score_candidate};
use hunt_parser::profile::parse_profile;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScoreArgs;
use crate::output::{ToMarkdown, output};
use crate::workspace::{Workspace, read_or_empty};

/// Handle `hunt score`.
pub fn handle(args: &ScoreArgs, workspace: &Workspace, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_or_empty(&workspace.profile_path(args.profile.as_deref()));
    let profile = parse_profile(&text);

    if !profile.is_filled() {
        tracing::warn!("profile is empty; scores will be mostly neutral");
    }

    let candidate = Candidate {
        title: args.title.clone(),
        company: args.company.clone(),
        industry: args.industry.clone(),
        location: args.location.clone(),
        comp: args.comp.clone(),
        stage: args.stage.clone(),
        remote: args.remote.clone(),
    };

    let report = score_candidate(&profile, &candidate);
    output(&report, flags.format_or(&workspace.config.general.default_format))
}

impl ToMarkdown for MatchReport {
    fn to_markdown(&self) -> String {
        let mut out = format!(
            "Match Score: {}/{} ({})\n\nBreakdown:\n",
            self.score,
            self.max_score,
            self.tier.label()
        );

        let categories = [
            ("title", self.breakdown.title),
            ("industry", self.breakdown.industry),
            ("location", self.breakdown.location),
            ("compensation", self.breakdown.compensation),
            ("watchlist", self.breakdown.watchlist),
            ("stage", self.breakdown.stage),
        ];
        for (name, points) in categories {
            let _ = writeln!(out, "  {name:<14}: {points:>3} pts");
        }

        if !self.deal_breakers.is_empty() {
            out.push_str("\nDeal-Breakers:\n");
            for reason in &self.deal_breakers {
                let _ = writeln!(out, "  - {reason}");
            }
        }

        out
    }
}
