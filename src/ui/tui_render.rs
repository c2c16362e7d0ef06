use crate::highlight::{self, Segment};
use crate::output::{self, OutputFormat};
use crate::types::{PredictOutcome, PredictResult};
use crate::ui::tui_state::{Focus, UiState};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the form, the result pane, and the help bar.
pub fn render(frame: &mut Frame, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // text
            Constraint::Length(3), // extra sentences
            Constraint::Length(3), // tokens
            Constraint::Length(3), // domain / multi / format row
            Constraint::Min(1),    // result pane
            Constraint::Length(3), // help bar
        ])
        .split(frame.area());

    render_field(frame, chunks[0], "Text", &state.text_input, state.focus == Focus::Text);
    render_field(
        frame,
        chunks[1],
        "Extra sentences (multi-sentence mode)",
        &state.extra_input,
        state.focus == Focus::Extra,
    );
    render_field(
        frame,
        chunks[2],
        "Tokens (JSON array of strings)",
        &state.tokens_input,
        state.focus == Focus::Tokens,
    );

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(chunks[3]);
    render_field(frame, row[0], "Domain", &state.domain_input, state.focus == Focus::Domain);
    let multi_mark = if state.multi { "[x] multi" } else { "[ ] multi" };
    render_field(frame, row[1], "Multi", multi_mark, state.focus == Focus::Multi);
    render_field(
        frame,
        row[2],
        "Format",
        &format_selector(state.format),
        state.focus == Focus::Format,
    );

    let title = if state.pending { "Result (calling…)" } else { "Result" };
    let result = Paragraph::new(result_lines(state))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll_offset as u16, 0));
    frame.render_widget(result, chunks[4]);

    // Help bar at bottom
    let help_text = vec![
        Span::styled("Tab: Next field  ", Style::default().fg(Color::Yellow)),
        Span::styled("Enter: Run  ", Style::default().fg(Color::Yellow)),
        Span::styled("Space: Multi  ", Style::default().fg(Color::Yellow)),
        Span::styled("←/→: Format  ", Style::default().fg(Color::Yellow)),
        Span::styled("↑/↓: Scroll  ", Style::default().fg(Color::Yellow)),
        Span::styled("Esc: Quit", Style::default().fg(Color::Yellow)),
    ];
    let help_bar =
        Paragraph::new(Line::from(help_text)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help_bar, chunks[5]);
}

fn render_field(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let widget = Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(border),
    );
    frame.render_widget(widget, area);
}

fn format_selector(selected: OutputFormat) -> String {
    [OutputFormat::Json, OutputFormat::Table, OutputFormat::Highlight]
        .iter()
        .map(|f| {
            if *f == selected {
                format!("[{}]", f.title())
            } else {
                f.title().to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result pane content: "no result yet", the error message, or the
/// selected view of the last result.
fn result_lines(state: &UiState) -> Vec<Line<'static>> {
    let Some(outcome) = &state.outcome else {
        return vec![Line::from("no result yet")];
    };
    match (state.format, outcome) {
        (_, PredictOutcome::Error { message }) => vec![Line::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )],
        (OutputFormat::Highlight, PredictOutcome::Success(result)) => highlight_lines(result),
        (OutputFormat::Json, _) => plain_lines(output::render_json(outcome)),
        (OutputFormat::Table, PredictOutcome::Success(result)) => {
            plain_lines(Ok(output::render_table(result)))
        }
    }
}

fn plain_lines(rendered: anyhow::Result<String>) -> Vec<Line<'static>> {
    let text = match rendered {
        Ok(s) => s,
        Err(e) => format!("render failed: {e}"),
    };
    text.lines().map(|l| Line::from(l.to_owned())).collect()
}

/// Reconciled segments as styled spans, split across lines on
/// embedded newlines. Entity segments get their palette color and a
/// dimmed `[LABEL]` tag.
fn highlight_lines(result: &PredictResult) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    for segment in highlight::reconcile(&result.text, &result.entities) {
        let (content, style, tag) = match segment {
            Segment::Text { content } => (content, Style::default(), None),
            Segment::Entity { content, label, .. } => {
                let style = Style::default()
                    .fg(highlight::label_color(&label))
                    .add_modifier(Modifier::BOLD);
                (content, style, Some(label))
            }
        };
        let mut parts = content.split('\n').peekable();
        while let Some(part) = parts.next() {
            if !part.is_empty() {
                current.push(Span::styled(part.to_owned(), style));
            }
            if parts.peek().is_some() {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
        }
        if let Some(label) = tag {
            current.push(Span::styled(
                format!("[{label}]"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    lines.push(Line::from(current));
    lines
}
