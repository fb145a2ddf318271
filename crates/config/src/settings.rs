//! Settings loading
//!
//! Layered loading: optional TOML file, then `ACCESS_CHAT_` environment
//! overrides (e.g. `ACCESS_CHAT_CHATBOT__MAX_RESULTS=3`).

use serde::{Deserialize, Serialize};

use crate::chatbot::ChatbotConfig;
use crate::responses::ResponseTemplates;
use crate::ConfigError;

/// Top-level settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Chatbot runtime configuration
    #[serde(default)]
    pub chatbot: ChatbotConfig,

    /// Response wording
    #[serde(default)]
    pub templates: ResponseTemplates,

    /// Log filter directive (e.g. "access_chat=debug")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

/// Load settings from an optional TOML file plus environment overrides
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        if !std::path::Path::new(path).exists() {
            return Err(ConfigError::FileNotFound(path.to_string()));
        }
        builder = builder.add_source(config::File::with_name(path));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("ACCESS_CHAT")
            .separator("__")
            .try_parsing(true),
    );

    let settings: Settings = builder.build()?.try_deserialize()?;
    tracing::debug!(
        max_results = settings.chatbot.max_results,
        "settings loaded"
    );
    Ok(settings)
}
