use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::agent::{extract_reply, GroqAgentService};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{ChatResponse, Message};

/// Stateless relay: validate, normalize, attach the key, forward, extract.
#[derive(Clone)]
pub struct RelayService {
    config: Arc<Config>,
    agent: GroqAgentService,
}

impl RelayService {
    pub fn new(config: Arc<Config>, agent: GroqAgentService) -> Self {
        Self { config, agent }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one chat turn for a raw request body.
    ///
    /// Input is validated before the credential check, and neither failure
    /// reaches the network.
    pub async fn relay(&self, body: &Value) -> Result<ChatResponse, AppError> {
        let raw_messages = body
            .get("messages")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                warn!("Rejected chat request without a messages array");
                AppError::BadRequest
            })?;

        let api_key = self.config.groq_api_key.as_deref().ok_or_else(|| {
            warn!("GROQ_API_KEY is not configured, refusing chat request");
            AppError::MissingApiKey
        })?;

        let messages: Vec<Message> = raw_messages.iter().map(Message::normalize).collect();

        let response = self.agent.complete(api_key, &messages).await?;
        let reply = extract_reply(&response);
        info!(messages = messages.len(), reply_len = reply.len(), "Relayed chat turn");

        Ok(ChatResponse { reply })
    }
}
