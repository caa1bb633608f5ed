use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{error, info};

use crate::config::Config;
use crate::errors::UpstreamError;
use crate::models::{Message, UpstreamRequest};

pub const FALLBACK_REPLY: &str = "No reply from Groq";

/// Pulls `choices[0].message.content` out of a completion body, substituting
/// [`FALLBACK_REPLY`] when the path is missing or empty.
pub fn extract_reply(body: &Value) -> String {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty())
        .unwrap_or(FALLBACK_REPLY)
        .to_string()
}

/// Thin client for the Groq OpenAI-compatible chat-completions endpoint.
/// One POST per chat turn, no retries.
#[derive(Clone)]
pub struct GroqAgentService {
    http: reqwest::Client,
    api_url: String,
    model: String,
}

impl GroqAgentService {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        Self::with_settings(&config.groq_api_url, &config.model, config.upstream_timeout)
    }

    pub fn with_settings(
        api_url: &str,
        model: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, UpstreamError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(UpstreamError::Client)?;

        Ok(Self {
            http,
            api_url: api_url.to_string(),
            model: model.to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Sends the conversation upstream and returns the parsed response body.
    ///
    /// The body is parsed whatever the status code; an error payload from
    /// Groq simply yields the fallback reply later on.
    pub async fn complete(&self, api_key: &str, messages: &[Message]) -> Result<Value, UpstreamError> {
        let payload = UpstreamRequest { model: &self.model, messages };

        let response = self
            .http
            .post(&self.api_url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| self.transport_error(e))?;

        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            error!("Groq returned a non-JSON body (status {status}): {e}");
            UpstreamError::InvalidBody {
                url: self.api_url.clone(),
                status: status.as_u16(),
                source: e,
            }
        })?;

        info!(status = status.as_u16(), "Groq response: {body}");
        Ok(body)
    }

    fn transport_error(&self, e: reqwest::Error) -> UpstreamError {
        error!("Groq request to {} failed: {e}", self.api_url);
        if e.is_timeout() {
            UpstreamError::Timeout { url: self.api_url.clone() }
        } else {
            UpstreamError::Transport { url: self.api_url.clone(), source: e }
        }
    }
}
