//! Hugging Face Inference backend for the summarizer challenge.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{Style, SummarizeProvider};
use crate::{KataError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(25);

/// One entry of the inference response payload. Summarization models report
/// `summary_text`; text-generation models report `generated_text`.
#[derive(Debug, Clone, Default, Deserialize)]
struct InferenceEntry {
    #[serde(default)]
    summary_text: String,
    #[serde(default)]
    generated_text: String,
}

/// A backend that posts prompts to a hosted summarization model.
#[derive(Debug, Clone)]
pub struct HuggingFace {
    pub(crate) endpoint: String,
    pub(crate) token: String,
}

impl HuggingFace {
    pub fn new(endpoint: String, token: String) -> Self {
        Self { endpoint, token }
    }
}

#[async_trait]
impl SummarizeProvider for HuggingFace {
    async fn summarize(&self, prompt: &str, style: Style) -> Result<String> {
        if self.token.is_empty() {
            return Err(KataError::InvalidArgument(
                "missing API token for the summarization endpoint".into(),
            ));
        }
        let payload = json!({
            "inputs": prompt,
            "parameters": { "max_new_tokens": style.max_new_tokens() },
        });
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let response = client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KataError::Api(format!(
                "status {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }
        debug!("summarization request to {} succeeded", self.endpoint);
        let entries: Vec<InferenceEntry> = response.json().await?;
        extract_summary(entries)
    }
}

/// Picks the summary text out of the response, preferring `summary_text`.
fn extract_summary(entries: Vec<InferenceEntry>) -> Result<String> {
    let first = entries
        .into_iter()
        .next()
        .ok_or_else(|| KataError::Api("empty response from API".into()))?;
    if !first.summary_text.is_empty() {
        return Ok(first.summary_text.trim().to_string());
    }
    if !first.generated_text.is_empty() {
        return Ok(first.generated_text.trim().to_string());
    }
    Err(KataError::Api("no summary text in response".into()))
}
