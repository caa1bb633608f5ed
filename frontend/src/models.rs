use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A message as shown in the chat. `id` is only a list key and never leaves
/// the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
}

/// Matches the relay's accepted message shape.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

impl From<&ChatMessage> for WireMessage {
    fn from(m: &ChatMessage) -> Self {
        Self {
            role: m.role.as_str().to_string(),
            content: m.content.clone(),
        }
    }
}

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RelayRequest {
    pub messages: Vec<WireMessage>,
}

/// Successful response from the relay.
#[derive(Clone, Debug, Deserialize)]
pub struct RelayReply {
    pub reply: String,
}
