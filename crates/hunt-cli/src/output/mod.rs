//! Output rendering for command responses.
//!
//! Every command builds a typed response from `hunt_core::responses` and
//! emits it either as pretty JSON or through its [`ToMarkdown`] rendering.
//! Markdown is the human default; JSON is the machine surface.

use serde::Serialize;

use crate::cli::OutputFormat;

/// Human-readable rendering of a command response.
pub trait ToMarkdown {
    fn to_markdown(&self) -> String;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + ToMarkdown>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Markdown => Ok(value.to_markdown()),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + ToMarkdown>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{ToMarkdown, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    impl ToMarkdown for Example {
        fn to_markdown(&self) -> String {
            format!("{}: {}", self.id, self.value)
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn markdown_render_uses_the_trait() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Markdown).expect("markdown render should work");
        assert_eq!(out, "x: 7");
    }
}
