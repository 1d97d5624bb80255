//! Chat state store and reducer

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::llm::Message;

/// Assistant greeting seeded into every fresh session.
pub const GREETING: &str = "Hello! Ask me anything about your products.";

/// Assistant reply shown when the completion call fails.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One message in a chat session.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}

/// Events that advance a chat session.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// The user submitted a message; a completion is now in flight.
    UserSubmitted(String),
    /// The completion call returned an answer.
    AssistantReplied(String),
    /// The completion call failed; the fallback reply is recorded instead.
    RequestFailed,
}

/// Immutable snapshot of a chat session.
#[derive(Debug, Clone)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A completion request is in flight.
    pub pending: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::new(Sender::Assistant, GREETING)],
            pending: false,
        }
    }
}

impl ChatState {
    /// Apply an event, producing the next snapshot. `self` is untouched.
    pub fn apply(&self, event: ChatEvent) -> ChatState {
        let mut next = self.clone();
        match event {
            ChatEvent::UserSubmitted(text) => {
                next.messages.push(ChatMessage::new(Sender::User, text));
                next.pending = true;
            }
            ChatEvent::AssistantReplied(text) => {
                next.messages.push(ChatMessage::new(Sender::Assistant, text));
                next.pending = false;
            }
            ChatEvent::RequestFailed => {
                next.messages
                    .push(ChatMessage::new(Sender::Assistant, FALLBACK_REPLY));
                next.pending = false;
            }
        }
        next
    }

    /// Map the session history onto completion-request messages, oldest first.
    ///
    /// `history_limit` > 0 keeps only the most recent messages; 0 sends
    /// the full history.
    pub fn to_request_messages(&self, history_limit: usize) -> Vec<Message> {
        let start = if history_limit > 0 && self.messages.len() > history_limit {
            self.messages.len() - history_limit
        } else {
            0
        };

        self.messages[start..]
            .iter()
            .map(|message| match message.sender {
                Sender::User => Message::user(message.text.clone()),
                Sender::Assistant => Message::assistant(message.text.clone()),
            })
            .collect()
    }

    /// Most recent assistant message, if any.
    pub fn last_assistant_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.sender == Sender::Assistant)
            .map(|message| message.text.as_str())
    }
}
