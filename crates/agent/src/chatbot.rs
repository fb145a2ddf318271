//! Chatbot facade
//!
//! `PlaceChatbot` is the single entry point: it classifies the message,
//! routes it to a handler, and converts any internal failure into a
//! chat-style apology. Callers never see an error; zero results and a
//! missing location are data, not failures.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use access_chat_config::{ChatbotConfig, ResponseTemplates, Settings};
use access_chat_core::{
    rank_by_distance, Coordinates, Place, PlaceDirectory, PlaceFilter,
};

use crate::intent::{Intent, IntentClassifier, IntentKind};
use crate::AgentError;

/// Unit returned to the caller for every message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Composed natural-language reply
    pub message: String,
    /// Ranked candidates, capped by the handler layer
    pub places: Vec<Place>,
    /// Follow-up query suggestions
    pub suggestions: Vec<String>,
}

/// Accessibility place-finder chatbot
pub struct PlaceChatbot {
    pub(crate) directory: Arc<dyn PlaceDirectory>,
    pub(crate) config: ChatbotConfig,
    pub(crate) templates: ResponseTemplates,
    classifier: IntentClassifier,
}

impl PlaceChatbot {
    /// Create a chatbot with default configuration
    pub fn new(directory: Arc<dyn PlaceDirectory>) -> Self {
        Self::with_settings(directory, Settings::default())
    }

    /// Create a chatbot from loaded settings
    pub fn with_settings(directory: Arc<dyn PlaceDirectory>, settings: Settings) -> Self {
        Self {
            directory,
            config: settings.chatbot,
            templates: settings.templates,
            classifier: IntentClassifier::new(),
        }
    }

    /// Create a chatbot from a settings file path
    pub fn from_settings_file(
        directory: Arc<dyn PlaceDirectory>,
        path: &str,
    ) -> Result<Self, AgentError> {
        let settings = access_chat_config::load_settings(Some(path))?;
        Ok(Self::with_settings(directory, settings))
    }

    /// Fixed follow-up suggestions, pure and I/O-free
    pub fn default_suggestions(&self) -> Vec<String> {
        self.templates.default_suggestions.clone()
    }

    /// Process one user message
    ///
    /// The only error boundary in the engine: upstream fetch failures
    /// and deadline expiries become the generic apology response here.
    pub async fn process_message(
        &self,
        text: &str,
        location: Option<Coordinates>,
    ) -> ChatResponse {
        let request_id = Uuid::new_v4();
        let intent = self.classifier.classify(text);
        tracing::debug!(%request_id, kind = ?intent.kind, "routing message");

        let routed = self.route(&intent, location);
        let result = match self.config.response_deadline_ms {
            Some(ms) => match tokio::time::timeout(Duration::from_millis(ms), routed).await {
                Ok(result) => result,
                Err(_) => Err(AgentError::Timeout),
            },
            None => routed.await,
        };

        match result {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%request_id, error = %err, "request failed, returning apology");
                self.apology()
            }
        }
    }

    /// Pure mapping from intent type to handler
    pub(crate) async fn route(
        &self,
        intent: &Intent,
        location: Option<Coordinates>,
    ) -> Result<ChatResponse, AgentError> {
        match intent.kind {
            IntentKind::Greeting => Ok(self.handle_greeting()),
            IntentKind::Help => Ok(self.handle_help()),
            IntentKind::Nearest => self.handle_nearest(intent, location).await,
            // Features has no independent logic; it shares the
            // accessibility handler
            IntentKind::Accessibility | IntentKind::Features => {
                self.handle_accessibility(intent, location).await
            }
            IntentKind::Category => self.handle_category(intent, location).await,
            IntentKind::SpecificPlace => self.handle_specific_place(intent).await,
            IntentKind::Recommendation => self.handle_recommendation(intent, location).await,
            IntentKind::General => self.handle_general(intent, location).await,
        }
    }

    /// Fetch both source collections concurrently and normalize
    ///
    /// Join semantics: either fetch failing fails the request, which the
    /// `process_message` boundary then converts to the apology.
    pub(crate) async fn fetch_candidates(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Place>, AgentError> {
        let filter = match category {
            Some(category) => PlaceFilter::by_category(category),
            None => PlaceFilter::default(),
        };

        let (places, businesses) = tokio::try_join!(
            self.directory.list_places(&filter),
            self.directory.list_businesses(&filter),
        )?;
        tracing::debug!(
            directory = self.directory.name(),
            places = places.len(),
            businesses = businesses.len(),
            "fetched candidates"
        );

        let mut candidates: Vec<Place> = places.into_iter().map(Place::from_place).collect();
        candidates.extend(businesses.into_iter().map(Place::from_business));
        Ok(candidates)
    }

    /// Rank by distance when a location is available, then cap
    pub(crate) fn shape(
        &self,
        mut places: Vec<Place>,
        location: Option<Coordinates>,
    ) -> Vec<Place> {
        if let Some(origin) = location {
            rank_by_distance(&mut places, origin);
        }
        places.truncate(self.config.max_results);
        places
    }

    pub(crate) fn apology(&self) -> ChatResponse {
        ChatResponse {
            message: self.templates.apology.clone(),
            places: Vec::new(),
            suggestions: self.default_suggestions(),
        }
    }
}
