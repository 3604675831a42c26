//! Submission Channel client.
//!
//! Two delivery paths exist, both fire-and-forget from the engine's point
//! of view: a form-encoded POST to the booking backend, and a clipboard
//! hand-off followed by the messaging-app deep link. The backend answers
//! JSON `{ "result": "success" | other, "message"?, "error"? }`.

use serde::Deserialize;
use thiserror::Error;

/// Deep link opened after the summary text is copied for the user.
pub const LINE_DEEP_LINK: &str = "https://line.me/ti/p/Kv76GQK_UI";

/// Parsed backend response body.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SubmitResponse {
    pub result: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// POSTs finalized summaries to the booking endpoint.
pub struct SubmitClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SubmitClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Sends the summary and total as a form-encoded body. A non-2xx
    /// status or a non-`success` result is an error; the caller may
    /// retry with the same snapshot without corruption.
    pub async fn submit(
        &self,
        summary: &str,
        total: i64,
    ) -> Result<SubmitResponse, SubmitError> {
        let form = [("summary", summary.to_string()), ("total", total.to_string())];
        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;

        let parsed: SubmitResponse = response.json().await?;
        if parsed.result == "success" {
            tracing::info!(endpoint = %self.endpoint, "submission accepted");
            Ok(parsed)
        } else {
            let reason = parsed
                .error
                .clone()
                .or_else(|| parsed.message.clone())
                .unwrap_or_else(|| parsed.result.clone());
            Err(SubmitError::Rejected(reason))
        }
    }
}

/// Text for the clipboard path: the summary followed by the deep link.
pub fn messaging_handoff(summary: &str) -> String {
    format!("{summary}\n\n{LINE_DEEP_LINK}")
}
