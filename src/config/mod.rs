//! Configuration management

mod settings;

pub use settings::{ApiSettings, ChatSettings, GeneralSettings, Settings};
