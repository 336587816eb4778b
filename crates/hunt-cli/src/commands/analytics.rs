use std::collections::BTreeMap;
use std::fmt::Write as _;

use hunt_core::responses::{AnalyticsReport, ConversionRates, DistributionEntry};
use hunt_parser::table::{Row, parse_table};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyticsArgs;
use crate::output::{ToMarkdown, output};
use crate::workspace::{Workspace, read_or_empty};

/// Outcomes that count an application as still in flight.
const ACTIVE_OUTCOMES: [&str; 2] = ["active", ""];
/// Outcomes that count an application as closed out.
const CLOSED_OUTCOMES: [&str; 3] = ["rejected", "closed", "withdrawn"];

/// Handle `hunt analytics`.
pub fn handle(
    args: &AnalyticsArgs,
    workspace: &Workspace,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let overridden;
    let workspace = match &args.workspace {
        Some(root) => {
            overridden = Workspace::resolve(Some(root))?;
            &overridden
        }
        None => workspace,
    };

    let dir = workspace.analytics_dir();
    anyhow::ensure!(
        dir.is_dir(),
        "no analytics directory at '{}'; run 'hunt init' first",
        dir.display()
    );

    let applications = parse_table(&read_or_empty(&dir.join("applications.md")));
    let interviews = parse_table(&read_or_empty(&dir.join("interviews.md")));
    let offers = parse_table(&read_or_empty(&dir.join("offers.md")));
    let briefings = parse_table(&read_or_empty(&dir.join("briefings.md")));

    let report = build_analytics(&applications, &interviews, &offers, &briefings);
    output(&report, flags.format_or(&workspace.config.general.default_format))
}

/// Aggregate the tracking tables into the analytics report.
pub(crate) fn build_analytics(
    applications: &[Row],
    interviews: &[Row],
    offers: &[Row],
    briefings: &[Row],
) -> AnalyticsReport {
    let total_applications = applications.len();
    let active = applications
        .iter()
        .filter(|row| ACTIVE_OUTCOMES.contains(&cell(row, "outcome").to_lowercase().as_str()))
        .count();
    let closed = applications
        .iter()
        .filter(|row| CLOSED_OUTCOMES.contains(&cell(row, "outcome").to_lowercase().as_str()))
        .count();
    let accepted = offers
        .iter()
        .filter(|row| cell(row, "decision").to_lowercase() == "accepted")
        .count();

    let conversion = ConversionRates {
        app_to_interview: rate(interviews.len(), total_applications),
        interview_to_offer: rate(offers.len(), interviews.len()),
        app_to_offer: rate(offers.len(), total_applications),
    };

    // Malformed or non-positive day counts are skipped, not fatal.
    let days: Vec<i64> = applications
        .iter()
        .filter_map(|row| cell(row, "days_active").parse::<i64>().ok())
        .filter(|days| *days > 0)
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let avg_days_active = if days.is_empty() {
        0.0
    } else {
        round1(days.iter().sum::<i64>() as f64 / days.len() as f64)
    };

    let stage_distribution = distribution(applications, "stage_reached");
    let source_distribution = distribution(applications, "source");
    let method_distribution = distribution(applications, "method");

    let mut recommendations = Vec::new();
    if total_applications == 0 {
        recommendations.push(String::from(
            "No applications yet. Start applying to roles in your pipeline.",
        ));
    } else if conversion.app_to_interview < 20.0 {
        recommendations.push(format!(
            "Low interview rate ({:.0}%). Consider tailoring resumes more or trying direct outreach.",
            conversion.app_to_interview
        ));
    } else if conversion.interview_to_offer < 30.0 && interviews.len() >= 3 {
        recommendations.push(format!(
            "Interview-to-offer conversion is low ({:.0}%). Invest in deeper interview preparation.",
            conversion.interview_to_offer
        ));
    }
    if total_applications > 10 && offers.is_empty() {
        recommendations.push(format!(
            "{total_applications} applications with no offers. Consider narrowing focus or adjusting target companies.",
        ));
    }
    if let Some(best) = source_distribution.first() {
        recommendations.push(format!(
            "Top source: {} ({} apps). Double down here.",
            best.label, best.count
        ));
    }
    if let Some(referrals) = method_distribution
        .iter()
        .find(|entry| entry.label.to_lowercase() == "referral")
    {
        recommendations.push(format!(
            "Referrals: {} used. Referrals typically have 3-5x higher conversion.",
            referrals.count
        ));
    }

    AnalyticsReport {
        total_applications,
        active,
        closed,
        interviews: interviews.len(),
        offers: offers.len(),
        accepted,
        conversion,
        avg_days_active,
        stage_distribution,
        source_distribution,
        method_distribution,
        briefings_generated: briefings.len(),
        recommendations,
    }
}

fn cell<'a>(row: &'a Row, key: &str) -> &'a str {
    row.get(key).map_or("", String::as_str)
}

/// Percentage with one decimal; 0 when the denominator is 0.
#[allow(clippy::cast_precision_loss)]
fn rate(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        round1(numerator as f64 / denominator as f64 * 100.0)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Bucket rows by a column, highest count first, ties by label.
fn distribution(rows: &[Row], key: &str) -> Vec<DistributionEntry> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in rows {
        let value = cell(row, key);
        let label = if value.is_empty() { "Unknown" } else { value };
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }

    let mut entries: Vec<DistributionEntry> = counts
        .into_iter()
        .map(|(label, count)| DistributionEntry { label, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    entries
}

impl ToMarkdown for AnalyticsReport {
    fn to_markdown(&self) -> String {
        let mut out = format!(
            "# Job Search Analytics\n\n## Overview\n\
             - Total applications: {}\n- Active: {}\n- Closed: {}\n\
             - Interviews: {}\n- Offers: {}\n- Accepted: {}\n\
             - Average days active: {:.0}\n\n## Conversion Funnel\n\
             - Applications -> Interviews: {:.1}%\n\
             - Interviews -> Offers: {:.1}%\n\
             - Applications -> Offers: {:.1}%\n",
            self.total_applications,
            self.active,
            self.closed,
            self.interviews,
            self.offers,
            self.accepted,
            self.avg_days_active,
            self.conversion.app_to_interview,
            self.conversion.interview_to_offer,
            self.conversion.app_to_offer,
        );

        for (title, entries) in [
            ("Sources", &self.source_distribution),
            ("Application Methods", &self.method_distribution),
        ] {
            if entries.is_empty() {
                continue;
            }
            let _ = write!(out, "\n## {title}\n");
            for entry in entries {
                let pct = rate(entry.count, self.total_applications);
                let _ = writeln!(out, "- {}: {} ({pct:.0}%)", entry.label, entry.count);
            }
        }

        if !self.recommendations.is_empty() {
            out.push_str("\n## Recommendations\n");
            for recommendation in &self.recommendations {
                let _ = writeln!(out, "- {recommendation}");
            }
        }

        let _ = write!(
            out,
            "\n## Activity\n- Briefings generated: {}\n",
            self.briefings_generated
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn applications(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| {
                row(&[
                    ("company", "Acme"),
                    ("outcome", if i % 2 == 0 { "Active" } else { "Rejected" }),
                    ("source", if i < 7 { "LinkedIn" } else { "Referral" }),
                    ("method", if i < 2 { "Referral" } else { "Portal" }),
                    ("days_active", "10"),
                    ("stage_reached", if i < 2 { "Interview" } else { "Applied" }),
                ])
            })
            .collect()
    }

    #[test]
    fn ten_apps_two_interviews_is_twenty_percent() {
        let report = build_analytics(&applications(10), &vec![row(&[]); 2], &[], &[]);
        assert_eq!(report.total_applications, 10);
        assert_eq!(report.interviews, 2);
        assert_eq!(report.conversion.app_to_interview, 20.0);
    }

    #[test]
    fn zero_denominators_yield_zero_rates() {
        let report = build_analytics(&[], &[], &[], &[]);
        assert_eq!(report.conversion.app_to_interview, 0.0);
        assert_eq!(report.conversion.interview_to_offer, 0.0);
        assert_eq!(report.conversion.app_to_offer, 0.0);
    }

    #[test]
    fn outcome_buckets_split_active_and_closed() {
        let report = build_analytics(&applications(10), &[], &[], &[]);
        assert_eq!(report.active, 5);
        assert_eq!(report.closed, 5);
    }

    #[test]
    fn malformed_day_counts_are_skipped() {
        let apps = vec![
            row(&[("days_active", "10")]),
            row(&[("days_active", "n/a")]),
            row(&[("days_active", "-3")]),
            row(&[("days_active", "20")]),
        ];
        let report = build_analytics(&apps, &[], &[], &[]);
        assert_eq!(report.avg_days_active, 15.0);
    }

    #[test]
    fn distributions_sort_by_count_desc() {
        let report = build_analytics(&applications(10), &[], &[], &[]);
        assert_eq!(report.source_distribution[0].label, "LinkedIn");
        assert_eq!(report.source_distribution[0].count, 7);
        assert_eq!(report.source_distribution[1].label, "Referral");
    }

    #[test]
    fn missing_column_buckets_as_unknown() {
        let apps = vec![row(&[("company", "Acme")])];
        let report = build_analytics(&apps, &[], &[], &[]);
        assert_eq!(report.stage_distribution[0].label, "Unknown");
    }

    #[test]
    fn low_interview_rate_triggers_tailoring_advice() {
        let report = build_analytics(&applications(10), &[row(&[])], &[], &[]);
        assert!(
            report
                .recommendations
                .iter()
                .any(|line| line.contains("Low interview rate (10%)"))
        );
    }

    #[test]
    fn many_apps_no_offers_triggers_focus_advice() {
        let report = build_analytics(&applications(11), &vec![row(&[]); 3], &[], &[]);
        assert!(
            report
                .recommendations
                .iter()
                .any(|line| line.contains("11 applications with no offers"))
        );
    }

    #[test]
    fn accepted_offers_are_counted() {
        let offers = vec![
            row(&[("decision", "Accepted")]),
            row(&[("decision", "Declined")]),
        ];
        let report = build_analytics(&[], &[], &offers, &[]);
        assert_eq!(report.offers, 2);
        assert_eq!(report.accepted, 1);
    }

    #[test]
    fn markdown_contains_funnel_and_activity() {
        let report = build_analytics(&applications(10), &vec![row(&[]); 2], &[], &[]);
        let md = report.to_markdown();
        assert!(md.contains("- Applications -> Interviews: 20.0%"));
        assert!(md.contains("## Sources"));
        assert!(md.contains("- Briefings generated: 0"));
    }

    #[test]
    fn referral_method_gets_a_note() {
        let report = build_analytics(&applications(10), &vec![row(&[]); 2], &[], &[]);
        assert!(
            report
                .recommendations
                .iter()
                .any(|line| line.contains("Referrals: 2 used"))
        );
    }
}
