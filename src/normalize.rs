use crate::types::{PredictResult, RawResponse};

/// Reconcile a raw server response with what was actually sent: the
/// sent token list stands in when the response has none, the sent
/// effective text stands in when the response's text is absent or
/// empty. Entities and any unrecognized fields pass through unchanged.
pub fn normalize(raw: RawResponse, sent_tokens: &[String], sent_text: &str) -> PredictResult {
    let tokens = raw.tokens.unwrap_or_else(|| sent_tokens.to_vec());
    let text = match raw.text {
        Some(t) if !t.is_empty() => t,
        _ => sent_text.to_owned(),
    };
    PredictResult {
        text,
        tokens,
        entities: raw.entities,
        extra: raw.extra,
    }
}
