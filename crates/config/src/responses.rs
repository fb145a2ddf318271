//! Response templates
//!
//! Canned wording for the chat engine. Dynamic parts (place names,
//! categories, counts) are formatted by the handlers; only the fixed
//! strings live here.

use serde::{Deserialize, Serialize};

/// Canned response wording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTemplates {
    /// Fixed welcome string for greeting queries
    #[serde(default = "default_welcome")]
    pub welcome: String,

    /// Capability overview for help queries
    #[serde(default = "default_help")]
    pub help: String,

    /// Generic apology used at the error boundary
    #[serde(default = "default_apology")]
    pub apology: String,

    /// Guidance when a nearest-style query arrives without a location
    #[serde(default = "default_no_location")]
    pub no_location: String,

    /// Fixed default follow-up suggestions
    #[serde(default = "default_suggestions")]
    pub default_suggestions: Vec<String>,
}

fn default_welcome() -> String {
    "Hello! I can help you find accessible places around you. \
     Ask me about restaurants, hotels, parks and more, or about a \
     specific place's accessibility features."
        .to_string()
}

fn default_help() -> String {
    "You can ask me things like \"find wheelchair accessible restaurants \
     near me\", \"does a place have ramp access\", or \"recommend \
     accessible hotels\". Share your location to get distance-sorted \
     results."
        .to_string()
}

fn default_apology() -> String {
    "Sorry, something went wrong while looking that up. Please try again."
        .to_string()
}

fn default_no_location() -> String {
    "I need your location to find the nearest places. Please enable \
     location sharing and try again."
        .to_string()
}

fn default_suggestions() -> Vec<String> {
    vec![
        "Wheelchair accessible restaurants near me".to_string(),
        "Find the nearest accessible hotel".to_string(),
        "Places with ramp access".to_string(),
        "What can you help me with?".to_string(),
    ]
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            welcome: default_welcome(),
            help: default_help(),
            apology: default_apology(),
            no_location: default_no_location(),
            default_suggestions: default_suggestions(),
        }
    }
}
