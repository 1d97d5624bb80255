//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Completion API settings
    #[serde(default)]
    pub api: ApiSettings,

    /// Chat mode settings
    #[serde(default)]
    pub chat: ChatSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Completion API provider (openai)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// API key
    #[serde(default)]
    pub api_key: String,

    /// Vision model used for listing generation
    #[serde(default = "default_vision_model")]
    pub model: String,

    /// API endpoint (empty = provider default)
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Completion token cap for listing generation
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Model used for chat turns
    #[serde(default = "default_chat_model")]
    pub model: String,

    /// Number of history messages sent per turn (0 = full history)
    #[serde(default)]
    pub history_limit: usize,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_vision_model() -> String {
    "gpt-4o".to_string()
}

fn default_chat_model() -> String {
    "gpt-4".to_string()
}

fn default_timeout_secs() -> u64 {
    45
}

fn default_max_tokens() -> u32 {
    300
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: String::new(),
            model: default_vision_model(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: default_chat_model(),
            history_limit: 0,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            api: ApiSettings::default(),
            chat: ChatSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.api.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("LISTER_OPENAI_API_KEY") {
                if !key.trim().is_empty() {
                    self.api.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "lister", "lister")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gpt_4o_vision_model() {
        let settings = Settings::default();
        assert_eq!(settings.api.model, "gpt-4o");
        assert_eq!(settings.chat.model, "gpt-4");
        assert_eq!(settings.api.provider, "openai");
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [api]
            api_key = "sk-test"
            "#,
        )
        .unwrap();

        assert_eq!(settings.api.api_key, "sk-test");
        assert_eq!(settings.api.model, "gpt-4o");
        assert_eq!(settings.api.timeout_secs, 45);
        assert_eq!(settings.api.max_tokens, 300);
        assert_eq!(settings.chat.history_limit, 0);
    }

    #[test]
    fn default_settings_round_trip_through_toml() {
        let settings = Settings::default();
        let content = toml::to_string_pretty(&settings).unwrap();
        let reparsed: Settings = toml::from_str(&content).unwrap();
        assert_eq!(reparsed.api.model, settings.api.model);
        assert_eq!(reparsed.general.log_level, settings.general.log_level);
    }
}
