use hunt_core::enums::Stage;

/// Parse a stage from a heading label ("Phone Screen") or a
/// snake/kebab-case value ("phone-screen"), case-insensitively.
pub fn parse_stage(raw: &str) -> anyhow::Result<Stage> {
    let trimmed = raw.trim();
    let normalized = trimmed.to_lowercase().replace(['-', ' '], "_");

    Stage::ALL
        .into_iter()
        .find(|stage| {
            stage.as_str() == normalized || stage.heading().eq_ignore_ascii_case(trimmed)
        })
        .ok_or_else(|| {
            let known = Stage::ALL
                .map(Stage::heading)
                .join(", ");
            anyhow::anyhow!("invalid stage '{raw}' (expected one of: {known})")
        })
}
