use crate::tokenizer;
use crate::types::PredictRequest;
use tracing::warn;

/// Everything the builder needs from the form at the moment "Run"
/// fires.
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    pub text: String,
    /// Appended to `text` only when `multi_mode` is on.
    pub extra_sentences: String,
    /// Raw token field contents; expected to be a JSON array of
    /// strings, anything else falls back to whitespace tokenization.
    pub raw_tokens: String,
    pub domain: String,
    pub multi_mode: bool,
    /// Explicit multi flag used when multi-sentence mode is off. Not
    /// exposed in the form; defaults false.
    pub multi_flag: bool,
}

/// A built payload plus whether the token list was synthesized, so a
/// caller owning a visible token field can echo the list back into it.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltRequest {
    pub payload: PredictRequest,
    pub tokens_synthesized: bool,
}

/// Assemble the outbound payload. Returns `None` when the primary
/// text is empty or whitespace-only; no other input can fail.
pub fn build_request(input: &RequestInput) -> Option<BuiltRequest> {
    if input.text.trim().is_empty() {
        return None;
    }

    let effective = if input.multi_mode && !input.extra_sentences.trim().is_empty() {
        format!("{}\n{}", input.text, input.extra_sentences)
    } else {
        input.text.clone()
    };

    let (tokens, tokens_synthesized) = match parse_token_list(&input.raw_tokens) {
        Some(tokens) => (tokens, false),
        None => (tokenizer::tokenize(&effective), true),
    };

    let multi = input.multi_mode || input.multi_flag;

    Some(BuiltRequest {
        payload: PredictRequest {
            text: effective,
            tokens,
            domain: input.domain.clone(),
            multi,
        },
        tokens_synthesized,
    })
}

/// Parse a user-typed token field as a JSON array of strings. Anything
/// else counts as "no input" and triggers the tokenizer fallback.
fn parse_token_list(raw: &str) -> Option<Vec<String>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(tokens) => Some(tokens),
        Err(e) => {
            warn!("token field is not a JSON string array, falling back to whitespace tokens: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_a_no_op() {
        let input = RequestInput {
            text: "   ".into(),
            ..Default::default()
        };
        assert!(build_request(&input).is_none());
    }

    #[test]
    fn explicit_token_list_is_honored() {
        let input = RequestInput {
            text: "Hello world".into(),
            raw_tokens: r#"["Hello", "world", "!"]"#.into(),
            domain: "General".into(),
            ..Default::default()
        };
        let built = build_request(&input).unwrap();
        assert!(!built.tokens_synthesized);
        assert_eq!(built.payload.tokens, vec!["Hello", "world", "!"]);
    }
}
