//! Configuration management for the accessibility place-finder chat engine
//!
//! Supports loading configuration from:
//! - TOML files
//! - Environment variables (ACCESS_CHAT_ prefix)
//! - Runtime overrides
//!
//! Response wording lives here so deployments can re-word the canned
//! messages without touching handler code; the `Default` implementations
//! carry the reference wording.

pub mod chatbot;
pub mod responses;
pub mod settings;

pub use chatbot::ChatbotConfig;
pub use responses::ResponseTemplates;
pub use settings::{load_settings, Settings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
