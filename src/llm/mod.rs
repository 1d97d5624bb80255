//! LLM client for lister
//!
//! Talks to an OpenAI-compatible chat-completion API for listing generation
//! and product chat.

mod client;
mod openai;
pub mod prompts;

pub use client::{build_provider, CompletionProvider, CompletionRequest, Message, Role};
pub use openai::OpenAiClient;
