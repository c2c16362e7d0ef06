use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One recognized entity occurrence, as reported by the server.
///
/// Nothing here is trusted: spans may arrive unsorted, overlapping,
/// out of bounds, or with endpoints missing entirely. The highlight
/// reconciler clamps before slicing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub end: Option<i64>,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Outbound prediction payload, fully determined by the form state at
/// the moment "Run" fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub text: String,
    pub tokens: Vec<String>,
    pub domain: String,
    pub multi: bool,
}

/// Server response before normalization. Unrecognized fields land in
/// `extra` and pass through untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResponse {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub tokens: Option<Vec<String>>,
    #[serde(default)]
    pub entities: Vec<EntitySpan>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Normalized result: `text` and `tokens` are always present, filled
/// from the sent payload when the server omitted them.
#[derive(Debug, Clone, Serialize)]
pub struct PredictResult {
    pub text: String,
    pub tokens: Vec<String>,
    pub entities: Vec<EntitySpan>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outcome of one submission. Errors are their own variant so callers
/// never have to sniff message contents to tell the cases apart.
#[derive(Debug, Clone)]
pub enum PredictOutcome {
    Success(PredictResult),
    Error { message: String },
}
