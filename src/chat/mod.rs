//! Product chat session
//!
//! Session state lives in an explicit store: every event produces a new
//! immutable snapshot instead of mutating fields in place.

mod state;

pub use state::{ChatEvent, ChatMessage, ChatState, Sender, FALLBACK_REPLY, GREETING};
