use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::openai::OpenAiClient;

/// Role of a chat participant as the completion API understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One message in a completion request.
#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub text: String,
    /// Optional image attachment, already rendered as a data URL.
    pub image: Option<String>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            image: None,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            image: None,
        }
    }

    /// Attach a photo to this message.
    pub fn with_image(mut self, data_url: String) -> Self {
        self.image = Some(data_url);
        self
    }
}

/// Completion request payload.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model override; `None` uses the provider's configured default.
    pub model: Option<String>,
    pub messages: Vec<Message>,
    pub max_tokens: Option<u32>,
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion and return the raw answer text, trimmed.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}

/// Build a completion provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn CompletionProvider>> {
    match settings.api.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported api.provider '{}'. Supported providers: openai",
            other
        ),
    }
}
