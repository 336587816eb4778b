//! Pipeline document parsing.
//!
//! The pipeline tracker is heading-per-stage, checkbox-per-entry:
//!
//! ```text
//! ## Applied
//! - [ ] **Senior PM — Acme** | ₹45L | Bangalore | Applied: Jan 05
//! ```
//!
//! Trailing pipe-delimited segments are classified by an ordered rule list —
//! first match wins, and a segment never reaches a later rule. Rule order:
//! URL prefix, currency glyph, location keyword, labeled date, follow-up
//! label, catch-all.

use hunt_core::entities::{ActiveTarget, Opportunity, OpportunityFields};
use hunt_core::enums::Stage;

/// Labeled date segments recognized by the classifier.
const DATE_LABELS: [&str; 3] = ["Found:", "Applied:", "Scheduled:"];

/// Fallback title slice of the raw line when no bold span is present,
/// skipping the checkbox marker.
const TITLE_PREFIX_START: usize = 6;
const TITLE_PREFIX_LEN: usize = 44;

/// Parse the pipeline document into opportunities.
///
/// The current stage is the most recent heading matching a [`Stage`] label;
/// lines under unrecognized headings are dropped silently.
#[must_use]
pub fn parse_pipeline(text: &str, location_keywords: &[String]) -> Vec<Opportunity> {
    let mut entries = Vec::new();
    let mut current_stage: Option<Stage> = None;

    for raw in text.lines() {
        let line = raw.trim();

        if let Some(heading) = line.strip_prefix("## ") {
            current_stage = Stage::from_heading(heading.trim());
            if current_stage.is_none() {
                tracing::debug!(heading, "ignoring entries under unrecognized heading");
            }
            continue;
        }

        let Some(stage) = current_stage else { continue };
        if !line.starts_with("- [") {
            continue;
        }

        entries.push(parse_entry_line(line, stage, location_keywords));
    }

    entries
}

fn parse_entry_line(line: &str, stage: Stage, location_keywords: &[String]) -> Opportunity {
    let title = bold_span(line)
        .map_or_else(|| prefix_title(line), ToString::to_string);

    let mut fields = OpportunityFields::default();
    for segment in line.split('|').skip(1) {
        classify_segment(segment.trim(), location_keywords, &mut fields);
    }

    Opportunity {
        title,
        stage,
        completed: line.contains("[x]"),
        fields,
        raw: line.to_string(),
    }
}

/// Apply the ordered classification rules to one segment.
///
/// Rules are evaluated top to bottom and the first hit consumes the segment;
/// a later rule that would also match silently loses. More than one
/// unclassified segment per line overwrites the catch-all.
fn classify_segment(segment: &str, location_keywords: &[String], fields: &mut OpportunityFields) {
    if segment.is_empty() {
        return;
    }

    if segment.starts_with("http") {
        fields.url = Some(segment.to_string());
        return;
    }
    if segment.contains('₹') || segment.contains('$') {
        fields.comp = Some(segment.to_string());
        return;
    }
    let lower = segment.to_lowercase();
    if location_keywords
        .iter()
        .any(|keyword| !keyword.is_empty() && lower.contains(keyword.as_str()))
    {
        fields.location = Some(segment.to_string());
        return;
    }
    for label in DATE_LABELS {
        if let Some(value) = segment.strip_prefix(label) {
            let key = label.trim_end_matches(':').to_lowercase();
            fields.dates.insert(key, value.trim().to_string());
            return;
        }
    }
    if let Some(value) = segment.strip_prefix("Follow-up:") {
        fields.followup = Some(value.trim().to_string());
        return;
    }
    fields.extra = Some(segment.to_string());
}

/// Text of the first `**bold**` span, if any.
fn bold_span(line: &str) -> Option<&str> {
    let start = line.find("**")? + 2;
    let rest = &line[start..];
    let end = rest.find("**")?;
    let span = rest[..end].trim();
    (!span.is_empty()).then_some(span)
}

/// Fixed-length fallback title: characters 6..50 of the raw line.
fn prefix_title(line: &str) -> String {
    line.chars()
        .skip(TITLE_PREFIX_START)
        .take(TITLE_PREFIX_LEN)
        .collect()
}

/// Derive summary rows from active entries.
///
/// Deadline comes from a `Scheduled:` or `Deadline:` segment, the next
/// action from a `Next:` segment; both fall back to "—".
#[must_use]
pub fn active_targets(entries: &[Opportunity]) -> Vec<ActiveTarget> {
    entries
        .iter()
        .filter(|entry| entry.stage.is_active())
        .map(|entry| {
            let (role, company) = entry.role_and_company();
            let mut deadline = String::from("—");
            let mut next_action = String::from("—");
            for segment in entry.raw.split('|').map(str::trim) {
                if let Some(value) = segment
                    .strip_prefix("Scheduled:")
                    .or_else(|| segment.strip_prefix("Deadline:"))
                {
                    deadline = value.trim().to_string();
                } else if let Some(value) = segment.strip_prefix("Next:") {
                    next_action = value.trim().to_string();
                }
            }
            ActiveTarget {
                company,
                role,
                stage: entry.stage,
                next_action,
                deadline,
            }
        })
        .collect()
}

/// Build an entry line following the pipeline grammar.
///
/// Bold "Role — Company" first, then the optional comp, location, and
/// `[link](url)` segments, terminated by the found date. Notes become an
/// indented sub-bullet on the following line.
#[must_use]
pub fn build_entry_line(
    role: &str,
    company: &str,
    comp: Option<&str>,
    location: Option<&str>,
    url: Option<&str>,
    notes: Option<&str>,
    found: &str,
) -> String {
    let mut parts = vec![format!("**{role} — {company}**")];
    if let Some(comp) = comp {
        parts.push(comp.to_string());
    }
    if let Some(location) = location {
        parts.push(location.to_string());
    }
    if let Some(url) = url {
        parts.push(format!("[link]({url})"));
    }
    parts.push(format!("Found: {found}"));

    let mut line = format!("- [ ] {}", parts.join(" | "));
    if let Some(notes) = notes {
        line.push_str(&format!("\n  - {notes}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn keywords() -> Vec<String> {
        ["remote", "bangalore", "mumbai", "delhi", "hybrid", "onsite", "india"]
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    const PIPELINE: &str = "\
# Job Search Pipeline

## Discovered
- [ ] **Senior PM — Acme** | ₹45L | Bangalore | Found: Jan 01

## Applied
- [x] **Platform PM — Globex** | https://globex.example/jobs/42 | Applied: Jan 05 | Follow-up: ping recruiter

## Ghosted
- [ ] **Lost Role — Nowhere**

## Offer
- [ ] **Staff PM — Initech** | $180K | Remote | Scheduled: Feb 10
";

    #[test]
    fn entries_attach_to_the_current_stage() {
        let entries = parse_pipeline(PIPELINE, &keywords());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].stage, Stage::Discovered);
        assert_eq!(entries[1].stage, Stage::Applied);
        assert_eq!(entries[2].stage, Stage::Offer);
    }

    #[test]
    fn unrecognized_heading_drops_its_entries() {
        let entries = parse_pipeline(PIPELINE, &keywords());
        assert!(entries.iter().all(|entry| entry.title != "Lost Role — Nowhere"));
    }

    #[test]
    fn bold_span_becomes_the_title() {
        let entries = parse_pipeline(PIPELINE, &keywords());
        assert_eq!(entries[0].title, "Senior PM — Acme");
    }

    #[test]
    fn missing_bold_falls_back_to_raw_prefix() {
        let text = "## Discovered\n- [ ] Senior PM at Acme, still unformatted\n";
        let entries = parse_pipeline(text, &keywords());
        assert_eq!(entries[0].title, "Senior PM at Acme, still unformatted");
    }

    #[test]
    fn checked_box_marks_completed() {
        let entries = parse_pipeline(PIPELINE, &keywords());
        assert!(!entries[0].completed);
        assert!(entries[1].completed);
    }

    #[test]
    fn segments_classify_in_rule_order() {
        let entries = parse_pipeline(PIPELINE, &keywords());

        let acme = &entries[0].fields;
        assert_eq!(acme.comp.as_deref(), Some("₹45L"));
        assert_eq!(acme.location.as_deref(), Some("Bangalore"));
        assert_eq!(acme.dates["found"], "Jan 01");

        let globex = &entries[1].fields;
        assert_eq!(globex.url.as_deref(), Some("https://globex.example/jobs/42"));
        assert_eq!(globex.dates["applied"], "Jan 05");
        assert_eq!(globex.followup.as_deref(), Some("ping recruiter"));
    }

    #[rstest]
    // A currency glyph inside a URL never fires: the URL rule runs first.
    #[case("https://pay.example/$ref", |f: &OpportunityFields| f.url.is_some() && f.comp.is_none())]
    // A location keyword in comp text loses to the currency rule.
    #[case("₹45L Bangalore", |f: &OpportunityFields| f.comp.is_some() && f.location.is_none())]
    fn first_matching_rule_wins(
        #[case] segment: &str,
        #[case] check: fn(&OpportunityFields) -> bool,
    ) {
        let mut fields = OpportunityFields::default();
        classify_segment(segment, &keywords(), &mut fields);
        assert!(check(&fields));
    }

    #[test]
    fn second_unclassified_segment_overwrites_extra() {
        let text = "## Discovered\n- [ ] **X — Y** | first note | second note\n";
        let entries = parse_pipeline(text, &keywords());
        assert_eq!(entries[0].fields.extra.as_deref(), Some("second note"));
    }

    #[test]
    fn active_targets_pull_deadline_and_next_action() {
        let entries = parse_pipeline(PIPELINE, &keywords());
        let targets = active_targets(&entries);
        assert_eq!(targets.len(), 3);
        assert_eq!(targets[0].company, "Acme");
        assert_eq!(targets[0].role, "Senior PM");
        assert_eq!(targets[0].deadline, "—");
        assert_eq!(targets[2].deadline, "Feb 10");
    }

    #[test]
    fn built_entry_line_round_trips_through_the_parser() {
        let line = build_entry_line(
            "Senior PM",
            "Acme",
            Some("₹45L"),
            Some("Bangalore"),
            Some("https://acme.example/jobs/7"),
            None,
            "Aug 07",
        );
        assert_eq!(
            line,
            "- [ ] **Senior PM — Acme** | ₹45L | Bangalore | [link](https://acme.example/jobs/7) | Found: Aug 07"
        );

        let text = format!("## Discovered\n{line}\n");
        let entries = parse_pipeline(&text, &keywords());
        assert_eq!(entries[0].title, "Senior PM — Acme");
        assert_eq!(entries[0].fields.comp.as_deref(), Some("₹45L"));
        assert_eq!(entries[0].fields.dates["found"], "Aug 07");
    }

    #[test]
    fn notes_append_a_sub_bullet() {
        let line = build_entry_line("PM", "Acme", None, None, None, Some("warm intro"), "Aug 07");
        assert_eq!(line, "- [ ] **PM — Acme** | Found: Aug 07\n  - warm intro");
    }
}
