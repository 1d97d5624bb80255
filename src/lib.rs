//! lister - A lightweight CLI tool for drafting product listings from photos with multimodal AI
//!
//! Point it at a product photo: the photo goes to an OpenAI-compatible vision
//! model, and the free-text answer comes back as a structured title +
//! description. A chat mode answers follow-up questions about your products.

pub mod chat;
pub mod cli;
pub mod config;
pub mod listing;
pub mod llm;
pub mod photo;

use thiserror::Error;

/// Main error type for lister
#[derive(Error, Debug)]
pub enum ListerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Photo error: {0}")]
    Photo(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ListerError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "lister";
