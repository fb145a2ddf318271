//! Chatbot runtime configuration

use serde::{Deserialize, Serialize};

/// Chatbot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotConfig {
    /// Maximum number of places returned in a response
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Optional deadline for a whole request (milliseconds)
    ///
    /// When set, a request that outlives the deadline is answered with
    /// the same apology response as an upstream failure. Unset by
    /// default: a hung upstream fetch then hangs the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_deadline_ms: Option<u64>,
}

fn default_max_results() -> usize {
    5
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            response_deadline_ms: None,
        }
    }
}
