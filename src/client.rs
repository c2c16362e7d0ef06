use crate::normalize;
use crate::types::{PredictOutcome, PredictRequest, RawResponse};
use anyhow::Result;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

/// Thin blocking client for the prediction endpoint. Every failure on
/// the predict path becomes a `PredictOutcome::Error`; nothing here is
/// fatal to the process.
pub struct PredictClient {
    http: Client,
    endpoint: String,
}

impl PredictClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// POST the payload and normalize whatever comes back.
    pub fn predict(&self, request: &PredictRequest) -> PredictOutcome {
        debug!(
            endpoint = %self.endpoint,
            tokens = request.tokens.len(),
            multi = request.multi,
            "sending predict request"
        );
        let response = match self.http.post(&self.endpoint).json(request).send() {
            Ok(r) => r,
            Err(e) => {
                return PredictOutcome::Error {
                    message: e.to_string(),
                };
            }
        };
        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().ok();
            debug!(%status, "predict request rejected");
            return PredictOutcome::Error {
                message: failure_message(body.as_ref()),
            };
        }
        match response.json::<RawResponse>() {
            Ok(raw) => PredictOutcome::Success(normalize::normalize(
                raw,
                &request.tokens,
                &request.text,
            )),
            Err(e) => PredictOutcome::Error {
                message: e.to_string(),
            },
        }
    }

    /// GET the service's /health route next to the predict endpoint.
    pub fn ping(&self) -> Result<String> {
        let url = health_url(&self.endpoint);
        let response = self.http.get(&url).send()?;
        let status = response.status();
        let body = response.text()?;
        Ok(format!("{url} -> {status} {body}"))
    }
}

/// Choose the user-facing message for a non-success response: the
/// body's `detail` field when present, else a generic one.
pub fn failure_message(body: Option<&Value>) -> String {
    body.and_then(|b| b.get("detail"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| "Server error".to_owned())
}

/// Derive the /health URL from the predict endpoint.
pub fn health_url(endpoint: &str) -> String {
    match endpoint.strip_suffix("/predict") {
        Some(base) => format!("{base}/health"),
        None => format!("{}/health", endpoint.trim_end_matches('/')),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_message_prefers_detail() {
        let body = json!({ "detail": "bad domain" });
        assert_eq!(failure_message(Some(&body)), "bad domain");
        assert_eq!(failure_message(Some(&json!({ "other": 1 }))), "Server error");
        assert_eq!(failure_message(None), "Server error");
    }

    #[test]
    fn health_url_replaces_predict_route() {
        assert_eq!(
            health_url("http://127.0.0.1:8000/predict"),
            "http://127.0.0.1:8000/health"
        );
        assert_eq!(
            health_url("http://127.0.0.1:8000/"),
            "http://127.0.0.1:8000/health"
        );
    }
}
