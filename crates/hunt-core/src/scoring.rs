//! Weighted match scoring of a candidate posting against the profile.
//!
//! Pure functions only — no I/O. Category maxima are fixed (title 30,
//! industry 20, location 15, compensation 20, watchlist 10, stage 5) and the
//! total is their unweighted sum, so 100 is the ceiling by construction.
//! Deal-breakers override the numeric tier entirely.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entities::Profile;
use crate::enums::MatchTier;

/// A posting to score, as free-form text fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,
    pub company: String,
    pub industry: String,
    pub location: String,
    pub comp: String,
    pub stage: String,
    /// Remote/hybrid/onsite note; echoed in the report, not scored —
    /// "remote" in the location text is what earns location credit.
    pub remote: String,
}

/// Per-category points earned, each capped at its fixed maximum.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub title: u32,
    pub industry: u32,
    pub location: u32,
    pub compensation: u32,
    pub watchlist: u32,
    pub stage: u32,
}

impl ScoreBreakdown {
    #[must_use]
    pub const fn total(self) -> u32 {
        self.title + self.industry + self.location + self.compensation + self.watchlist + self.stage
    }
}

/// Result of scoring one candidate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MatchReport {
    pub score: u32,
    pub max_score: u32,
    pub tier: MatchTier,
    pub breakdown: ScoreBreakdown,
    pub deal_breakers: Vec<String>,
    pub candidate: Candidate,
}

/// Score `candidate` against `profile`.
#[must_use]
pub fn score_candidate(profile: &Profile, candidate: &Candidate) -> MatchReport {
    let mut deal_breakers = Vec::new();

    let breakdown = ScoreBreakdown {
        title: title_points(&profile.titles, &candidate.title),
        industry: industry_points(&profile.industries, &candidate.industry),
        location: location_points(&profile.locations, &candidate.location),
        compensation: compensation_points(profile, &candidate.comp, &mut deal_breakers),
        watchlist: watchlist_points(&profile.watchlist, &candidate.company),
        stage: stage_points(&profile.stage_pref, &candidate.stage),
    };

    let industry = candidate.industry.to_lowercase();
    let company = candidate.company.to_lowercase();
    for term in &profile.avoid {
        if term.is_empty() {
            continue;
        }
        if industry.contains(term.as_str()) || company.contains(term.as_str()) {
            deal_breakers.push(format!("Company/industry matches avoid list: {term}"));
        }
    }

    let score = breakdown.total();
    let tier = if deal_breakers.is_empty() {
        MatchTier::from_score(score)
    } else {
        MatchTier::DealBreaker
    };

    MatchReport {
        score,
        max_score: 100,
        tier,
        breakdown,
        deal_breakers,
        candidate: candidate.clone(),
    }
}

/// Title category (0-30): substring match in either direction wins outright;
/// otherwise the best word-overlap tier across all targets.
fn title_points(targets: &[String], title: &str) -> u32 {
    let title_lower = title.to_lowercase();
    if title_lower.is_empty() {
        return 0;
    }
    let title_words: HashSet<&str> = title_lower.split_whitespace().collect();

    let mut best = 0;
    for target in targets {
        let target_lower = target.to_lowercase();
        if target_lower.is_empty() {
            continue;
        }
        if title_lower.contains(&target_lower) || target_lower.contains(&title_lower) {
            return 30;
        }
        let overlap = target_lower
            .split_whitespace()
            .filter(|word| title_words.contains(word))
            .count();
        best = best.max(match overlap {
            0 => 0,
            1 => 10,
            _ => 20,
        });
    }
    best
}

/// Industry category (0-20): listed match, or a small neutral credit for any
/// unlisted but non-empty industry.
fn industry_points(industries: &[String], industry: &str) -> u32 {
    let industry_lower = industry.to_lowercase();
    if industries
        .iter()
        .any(|listed| !listed.is_empty() && industry_lower.contains(listed.as_str()))
    {
        20
    } else if industry_lower.is_empty() {
        0
    } else {
        5
    }
}

/// Location category (0-15): listed match beats a remote mention beats any
/// other non-empty location.
fn location_points(locations: &[String], location: &str) -> u32 {
    let location_lower = location.to_lowercase();
    if locations
        .iter()
        .any(|listed| !listed.is_empty() && location_lower.contains(listed.as_str()))
    {
        15
    } else if location_lower.contains("remote") {
        12
    } else if location_lower.is_empty() {
        0
    } else {
        3
    }
}

/// Compensation category (0-20) plus the shortfall deal-breaker.
///
/// Unknown comp is neutral (10). A parsed value below 90% of the floor scores
/// zero and raises a deal-breaker; between 90% and the floor it scores 12.
fn compensation_points(profile: &Profile, comp: &str, deal_breakers: &mut Vec<String>) -> u32 {
    if comp.is_empty() {
        return 10;
    }
    let (Some(value), Some(floor)) = (first_number(comp), profile.comp_floor) else {
        return 0;
    };
    let (value, floor) = normalize_units(comp, value, floor);

    if value >= floor {
        20
    } else if value >= floor * 0.9 {
        12
    } else {
        deal_breakers.push(format!("Comp ({comp}) below floor ({floor})"));
        0
    }
}

/// Unit branches for lakh ("L") and thousand ("K") figures.
///
/// Known limitation: every branch currently applies identical (no) scaling,
/// so "₹45L" and "45" compare equally against the floor.
// TODO: scale lakh and thousand amounts to a shared unit before comparing.
#[allow(clippy::if_same_then_else)]
fn normalize_units(comp: &str, value: f64, floor: f64) -> (f64, f64) {
    let upper = comp.to_uppercase();
    if upper.contains('L') {
        (value, floor)
    } else if upper.contains('K') {
        (value, floor)
    } else {
        (value, floor)
    }
}

/// Watchlist category (0-10): exact lower-cased company match.
fn watchlist_points(watchlist: &[String], company: &str) -> u32 {
    let company_lower = company.to_lowercase();
    if !company_lower.is_empty() && watchlist.iter().any(|entry| *entry == company_lower) {
        10
    } else {
        0
    }
}

/// Stage category (0-5): any preferred stage appearing in the candidate's
/// stage text.
fn stage_points(stage_pref: &[String], stage: &str) -> u32 {
    if stage.is_empty() || stage_pref.is_empty() {
        return 0;
    }
    let stage_lower = stage.to_lowercase();
    if stage_pref
        .iter()
        .any(|pref| !pref.is_empty() && stage_lower.contains(pref.as_str()))
    {
        5
    } else {
        0
    }
}

/// First numeric token of a mixed string, commas stripped.
///
/// Returns `None` for text with no digits; malformed fragments are skipped
/// rather than propagated.
#[must_use]
pub fn first_number(text: &str) -> Option<f64> {
    let cleaned = text.replace(',', "");
    let mut token = String::new();
    for ch in cleaned.chars() {
        if ch.is_ascii_digit() || (ch == '.' && !token.is_empty()) {
            token.push(ch);
        } else if !token.is_empty() {
            break;
        }
    }
    token.trim_end_matches('.').parse().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::enums::Currency;

    fn profile() -> Profile {
        Profile {
            name: String::from("A. Searcher"),
            titles: vec![String::from("Senior Product Manager"), String::from("Group PM")],
            industries: vec![String::from("fintech"), String::from("saas")],
            locations: vec![String::from("bangalore"), String::from("remote")],
            stage_pref: vec![String::from("series b"), String::from("growth")],
            notice: String::from("30 days"),
            comp_floor: Some(40.0),
            comp_floor_text: String::from("₹40L"),
            comp_currency: Currency::Inr,
            avoid: vec![String::from("gambling")],
            watchlist: vec![String::from("stripe")],
            optimizing: String::from("- Optimizing for growth"),
            preferences: Vec::new(),
        }
    }

    fn candidate(comp: &str) -> Candidate {
        Candidate {
            title: String::from("Senior Product Manager"),
            company: String::from("Acme"),
            industry: String::from("Fintech"),
            location: String::from("Bangalore"),
            comp: comp.to_string(),
            stage: String::from("Series B"),
            remote: String::new(),
        }
    }

    #[rstest]
    #[case("₹40L", 20, false)]
    #[case("₹37L", 12, false)]
    #[case("₹35L", 0, true)]
    fn compensation_floor_boundaries(
        #[case] comp: &str,
        #[case] expected: u32,
        #[case] breaker: bool,
    ) {
        let report = score_candidate(&profile(), &candidate(comp));
        assert_eq!(report.breakdown.compensation, expected);
        assert_eq!(!report.deal_breakers.is_empty(), breaker);
    }

    #[test]
    fn unknown_comp_is_neutral() {
        let report = score_candidate(&profile(), &candidate(""));
        assert_eq!(report.breakdown.compensation, 10);
        assert!(report.deal_breakers.is_empty());
    }

    #[test]
    fn comp_without_floor_scores_zero_without_breaker() {
        let mut p = profile();
        p.comp_floor = None;
        let report = score_candidate(&p, &candidate("₹35L"));
        assert_eq!(report.breakdown.compensation, 0);
        assert!(report.deal_breakers.is_empty());
    }

    #[test]
    fn full_match_hits_the_ceiling() {
        let mut c = candidate("₹45L");
        c.company = String::from("Stripe");
        let report = score_candidate(&profile(), &c);
        assert_eq!(
            report.breakdown,
            ScoreBreakdown {
                title: 30,
                industry: 20,
                location: 15,
                compensation: 20,
                watchlist: 10,
                stage: 5,
            }
        );
        assert_eq!(report.score, 100);
        assert_eq!(report.tier, MatchTier::High);
    }

    #[test]
    fn deal_breaker_overrides_high_score() {
        let mut c = candidate("₹45L");
        c.company = String::from("Stripe");
        c.industry = String::from("Fintech gambling");
        let report = score_candidate(&profile(), &c);
        assert!(report.score >= 75);
        assert_eq!(report.tier, MatchTier::DealBreaker);
        assert_eq!(report.deal_breakers.len(), 1);
    }

    #[test]
    fn tier_boundary_at_75() {
        // title 30 + industry 20 + location 15 + comp neutral 10 = 75
        let c = Candidate {
            comp: String::new(),
            stage: String::new(),
            ..candidate("")
        };
        let report = score_candidate(&profile(), &c);
        assert_eq!(report.score, 75);
        assert_eq!(report.tier, MatchTier::High);

        // Drop location to the remote tier: 30 + 20 + 12 + 10 = 72 < 75.
        let mut p = profile();
        p.locations = vec![String::from("bangalore")];
        let c = Candidate {
            location: String::from("Remote (US)"),
            ..c
        };
        let report = score_candidate(&p, &c);
        assert_eq!(report.score, 72);
        assert_eq!(report.tier, MatchTier::Medium);
    }

    #[rstest]
    #[case("Senior Product Manager", 30)] // exact
    #[case("Senior Product Lead", 20)] // two shared words
    #[case("Engineering Manager", 10)] // one shared word
    #[case("Staff Engineer", 0)]
    fn title_tiers(#[case] title: &str, #[case] expected: u32) {
        assert_eq!(title_points(&profile().titles, title), expected);
    }

    #[test]
    fn title_substring_matches_either_direction() {
        assert_eq!(title_points(&profile().titles, "Group PM, Payments"), 30);
        assert_eq!(title_points(&[String::from("PM")], "Senior PM — Platform"), 30);
    }

    #[test]
    fn unlisted_industry_gets_neutral_credit() {
        assert_eq!(industry_points(&profile().industries, "Logistics"), 5);
        assert_eq!(industry_points(&profile().industries, ""), 0);
    }

    #[rstest]
    #[case("Bangalore (hybrid)", 15)]
    #[case("Remote, EU hours", 15)] // "remote" is also a listed location here
    #[case("Pune", 3)]
    #[case("", 0)]
    fn location_tiers(#[case] location: &str, #[case] expected: u32) {
        assert_eq!(location_points(&profile().locations, location), expected);
    }

    #[test]
    fn remote_mention_without_listing() {
        let locations = vec![String::from("bangalore")];
        assert_eq!(location_points(&locations, "Remote-first"), 12);
    }

    #[test]
    fn watchlist_requires_exact_company() {
        assert_eq!(watchlist_points(&profile().watchlist, "Stripe"), 10);
        assert_eq!(watchlist_points(&profile().watchlist, "Stripe India"), 0);
    }

    #[rstest]
    #[case("₹45L", Some(45.0))]
    #[case("$1,20,000", Some(120_000.0))]
    #[case("40-50 LPA", Some(40.0))]
    #[case("45.5L", Some(45.5))]
    #[case("TBD", None)]
    #[case("", None)]
    fn first_number_extraction(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(first_number(text), expected);
    }

    #[test]
    fn unit_suffix_branches_are_noops() {
        assert_eq!(normalize_units("₹45L", 45.0, 40.0), (45.0, 40.0));
        assert_eq!(normalize_units("$180K", 180.0, 40.0), (180.0, 40.0));
        assert_eq!(normalize_units("45", 45.0, 40.0), (45.0, 40.0));
    }
}
