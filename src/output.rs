use crate::highlight::{self, Segment};
use crate::types::{PredictOutcome, PredictResult};
use anyhow::Result;
use clap::ValueEnum;
use crossterm::style::Stylize;
use serde_json::json;

/// The three fixed result views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    #[default]
    Highlight,
}

impl OutputFormat {
    pub fn next(self) -> Self {
        match self {
            Self::Json => Self::Table,
            Self::Table => Self::Highlight,
            Self::Highlight => Self::Json,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Json => Self::Highlight,
            Self::Table => Self::Json,
            Self::Highlight => Self::Table,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Table => "TABLE",
            Self::Highlight => "HIGHLIGHT",
        }
    }
}

// clap's default_value_t renders the default through Display; keep it
// in sync with the ValueEnum value names.
impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Table => "table",
            Self::Highlight => "highlight",
        };
        write!(f, "{name}")
    }
}

/// Render an outcome for stdout in the selected format. Error
/// outcomes render as their message (an error object for JSON) before
/// any entity handling is attempted.
pub fn render(outcome: &PredictOutcome, format: OutputFormat) -> Result<String> {
    match (format, outcome) {
        (OutputFormat::Json, _) => render_json(outcome),
        (_, PredictOutcome::Error { message }) => Ok(format!("error: {message}\n")),
        (OutputFormat::Table, PredictOutcome::Success(result)) => Ok(render_table(result)),
        (OutputFormat::Highlight, PredictOutcome::Success(result)) => Ok(render_highlight(result)),
    }
}

/// Pretty JSON of the normalized result, or `{ "error": ... }`.
pub fn render_json(outcome: &PredictOutcome) -> Result<String> {
    let value = match outcome {
        PredictOutcome::Success(result) => serde_json::to_value(result)?,
        PredictOutcome::Error { message } => json!({ "error": message }),
    };
    Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
}

/// Aligned TEXT | LABEL | SPAN columns plus a token summary line.
/// Rows come from the reconciled segments, so spans are clamped.
pub fn render_table(result: &PredictResult) -> String {
    let mut out = String::new();
    let rows: Vec<(String, String, String)> = highlight::reconcile(&result.text, &result.entities)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Entity {
                content,
                label,
                start,
                end,
            } => Some((content, label, format!("{start}..{end}"))),
            Segment::Text { .. } => None,
        })
        .collect();

    if rows.is_empty() {
        out.push_str("(no entities)\n");
    } else {
        let text_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).max(4);
        let label_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).max(5);
        out.push_str(&format!(
            "{:<text_w$}  {:<label_w$}  SPAN\n",
            "TEXT", "LABEL"
        ));
        for (text, label, span) in &rows {
            out.push_str(&format!("{text:<text_w$}  {label:<label_w$}  {span}\n"));
        }
    }
    out.push_str(&format!(
        "tokens ({}): {}\n",
        result.tokens.len(),
        result.tokens.join(" ")
    ));
    out
}

/// The full text with entity segments colored and tagged `[LABEL]`.
pub fn render_highlight(result: &PredictResult) -> String {
    let mut out = String::new();
    for segment in highlight::reconcile(&result.text, &result.entities) {
        match segment {
            Segment::Text { content } => out.push_str(&content),
            Segment::Entity { content, label, .. } => {
                let styled = content
                    .with(term_color(highlight::label_color(&label)))
                    .bold();
                out.push_str(&format!("{styled}[{label}]"));
            }
        }
    }
    out.push('\n');
    out
}

// ratatui colors drive the TUI; map the palette onto crossterm's for
// plain ANSI output.
fn term_color(color: ratatui::style::Color) -> crossterm::style::Color {
    use crossterm::style::Color as C;
    use ratatui::style::Color as R;
    match color {
        R::Yellow => C::Yellow,
        R::Cyan => C::Cyan,
        R::Green => C::Green,
        R::Magenta => C::Magenta,
        R::Blue => C::Blue,
        R::LightRed => C::Red,
        _ => C::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntitySpan;
    use serde_json::Map;

    fn result_with(entities: Vec<EntitySpan>) -> PredictResult {
        PredictResult {
            text: "Harry went to Hogwarts".into(),
            tokens: vec![
                "Harry".into(),
                "went".into(),
                "to".into(),
                "Hogwarts".into(),
            ],
            entities,
            extra: Map::new(),
        }
    }

    #[test]
    fn table_without_entities_says_so() {
        let rendered = render_table(&result_with(vec![]));
        assert!(rendered.starts_with("(no entities)\n"));
        assert!(rendered.contains("tokens (4): Harry went to Hogwarts"));
    }

    #[test]
    fn table_lists_clamped_rows() {
        let rendered = render_table(&result_with(vec![EntitySpan {
            start: Some(14),
            end: Some(99),
            label: "GPE".into(),
            text: None,
        }]));
        assert!(rendered.contains("Hogwarts"));
        assert!(rendered.contains("14..22"));
    }

    #[test]
    fn json_error_outcome_is_an_error_object() {
        let outcome = PredictOutcome::Error {
            message: "bad domain".into(),
        };
        let rendered = render_json(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["error"], "bad domain");
    }
}
