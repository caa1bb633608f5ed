use crate::models::{ChatMessage, RelayRequest, Role, WireMessage};

pub const SUGGESTIONS: [&str; 3] = [
    "What can I ask you to do?",
    "Which one of my projects is performing the best?",
    "What projects should I be concerned about right now?",
];

/// Assistant bubble appended when the relay call fails.
pub const ERROR_REPLY: &str = "Sorry — there was an error getting a response.";
pub const ERROR_BANNER: &str = "Failed to get response from server";

/// In-memory state of one chat session: the append-only message list, the
/// input box, and the single in-flight flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
    input: String,
    is_typing: bool,
    submitting: bool,
    error: Option<String>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
            input: String::new(),
            is_typing: false,
            submitting: false,
            error: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Fills the input box; the user still has to send it.
    pub fn apply_suggestion(&mut self, suggestion: &str) {
        self.input = suggestion.to_string();
    }

    /// Starts a submission from the current input.
    ///
    /// Returns the payload for the relay, or `None` when the input is blank
    /// or another submission is still outstanding.
    pub fn begin_submit(&mut self) -> Option<RelayRequest> {
        if self.submitting {
            return None;
        }
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.error = None;
        self.submitting = true;
        self.push(Role::User, text);
        self.input.clear();
        self.is_typing = true;

        Some(RelayRequest {
            messages: self.messages.iter().map(WireMessage::from).collect(),
        })
    }

    /// Completes the outstanding submission with the relay outcome.
    pub fn finish(&mut self, outcome: Result<String, String>) {
        match outcome {
            Ok(reply) => {
                self.push(Role::Assistant, reply);
            }
            Err(_) => {
                self.error = Some(ERROR_BANNER.to_string());
                self.push(Role::Assistant, ERROR_REPLY.to_string());
            }
        }
        self.is_typing = false;
        self.submitting = false;
    }

    fn push(&mut self, role: Role, content: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, role, content });
    }
}
