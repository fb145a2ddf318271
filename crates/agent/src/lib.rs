//! Place-finder chat engine
//!
//! Features:
//! - Rule-based intent classification with ordered pattern gates
//! - Intent routing to seven response handlers
//! - Concurrent two-source candidate fetch and normalization
//! - Haversine distance ranking with a handler-side result cap
//! - Canned response composition with follow-up suggestions

pub mod chatbot;
mod handlers;
pub mod intent;

pub use chatbot::{ChatResponse, PlaceChatbot};
pub use intent::{Intent, IntentClassifier, IntentKind};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Directory error: {0}")]
    Directory(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout")]
    Timeout,
}

impl From<access_chat_core::Error> for AgentError {
    fn from(err: access_chat_core::Error) -> Self {
        match err {
            access_chat_core::Error::Timeout => AgentError::Timeout,
            other => AgentError::Directory(other.to_string()),
        }
    }
}

impl From<access_chat_config::ConfigError> for AgentError {
    fn from(err: access_chat_config::ConfigError) -> Self {
        AgentError::Config(err.to_string())
    }
}
