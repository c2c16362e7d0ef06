use crate::config::Config;
use crate::output::OutputFormat;
use crate::request::RequestInput;
use crate::types::PredictOutcome;

/// Which form control has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Text,
    Extra,
    Tokens,
    Domain,
    Multi,
    Format,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Text => Focus::Extra,
            Focus::Extra => Focus::Tokens,
            Focus::Tokens => Focus::Domain,
            Focus::Domain => Focus::Multi,
            Focus::Multi => Focus::Format,
            Focus::Format => Focus::Text,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Text => Focus::Format,
            Focus::Extra => Focus::Text,
            Focus::Tokens => Focus::Extra,
            Focus::Domain => Focus::Tokens,
            Focus::Multi => Focus::Domain,
            Focus::Format => Focus::Multi,
        }
    }
}

/// Shared UI state for the prediction form and result pane.
pub struct UiState {
    pub text_input: String,
    pub extra_input: String,
    pub tokens_input: String,
    pub domain_input: String,
    pub multi: bool,
    pub format: OutputFormat,
    pub focus: Focus,
    /// Current result; overwritten wholesale on every submission.
    pub outcome: Option<PredictOutcome>,
    /// One request in flight at a time; Run is ignored while set.
    pub pending: bool,
    pub scroll_offset: usize,
}

impl UiState {
    /// Seed the form from CLI-provided defaults.
    pub fn new(config: &Config) -> Self {
        UiState {
            text_input: config.text.clone().unwrap_or_default(),
            extra_input: config.extra.clone(),
            tokens_input: config.tokens.clone(),
            domain_input: config.domain.clone(),
            multi: config.multi,
            format: config.format,
            focus: Focus::Text,
            outcome: None,
            pending: false,
            scroll_offset: 0,
        }
    }

    /// The buffer behind the focused control, when it is editable.
    pub fn focused_buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Text => Some(&mut self.text_input),
            Focus::Extra => Some(&mut self.extra_input),
            Focus::Tokens => Some(&mut self.tokens_input),
            Focus::Domain => Some(&mut self.domain_input),
            Focus::Multi | Focus::Format => None,
        }
    }

    /// Snapshot the form for the request builder.
    pub fn request_input(&self) -> RequestInput {
        RequestInput {
            text: self.text_input.clone(),
            extra_sentences: self.extra_input.clone(),
            raw_tokens: self.tokens_input.clone(),
            domain: self.domain_input.clone(),
            multi_mode: self.multi,
            multi_flag: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycle_visits_every_control() {
        let mut focus = Focus::Text;
        for _ in 0..6 {
            assert_eq!(focus.next().prev(), focus);
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Text);
    }
}
