//! Intent handlers
//!
//! One handler per intent type. Every handler returns a complete
//! `ChatResponse` with the place list capped at the configured maximum
//! and between two and four follow-up suggestions. Fetch errors
//! propagate to the `process_message` boundary; nothing here surfaces an
//! error to the end user.

use access_chat_core::Coordinates;

use crate::chatbot::{ChatResponse, PlaceChatbot};
use crate::intent::Intent;
use crate::AgentError;

fn suggestions(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Human wording for a canonical feature tag
fn feature_label(tag: &str) -> String {
    match tag {
        "wheelchair_accessible" => "wheelchair access".to_string(),
        "ramp_access" => "ramp access".to_string(),
        "elevator" => "an elevator".to_string(),
        "braille" => "braille signage".to_string(),
        "hearing_assistance" => "hearing assistance".to_string(),
        "accessible_parking" => "accessible parking".to_string(),
        other => other.replace('_', " "),
    }
}

impl PlaceChatbot {
    pub(crate) fn handle_greeting(&self) -> ChatResponse {
        ChatResponse {
            message: self.templates.welcome.clone(),
            places: Vec::new(),
            suggestions: self.default_suggestions(),
        }
    }

    pub(crate) fn handle_help(&self) -> ChatResponse {
        ChatResponse {
            message: self.templates.help.clone(),
            places: Vec::new(),
            suggestions: self.default_suggestions(),
        }
    }

    /// Nearest requires a coordinate; without one it answers with
    /// guidance instead of degraded results.
    pub(crate) async fn handle_nearest(
        &self,
        intent: &Intent,
        location: Option<Coordinates>,
    ) -> Result<ChatResponse, AgentError> {
        let Some(origin) = location else {
            return Ok(ChatResponse {
                message: self.templates.no_location.clone(),
                places: Vec::new(),
                suggestions: suggestions(&[
                    "Wheelchair accessible restaurants",
                    "Recommend accessible places",
                    "What can you help me with?",
                ]),
            });
        };

        let candidates = self.fetch_candidates(intent.category.as_deref()).await?;
        let places = self.shape(candidates, Some(origin));

        let subject = intent.category.as_deref().unwrap_or("places");
        let message = if places.is_empty() {
            format!("I couldn't find any {subject} near you.")
        } else {
            format!("Here are the nearest {subject} to you:")
        };

        Ok(ChatResponse {
            message,
            places,
            suggestions: suggestions(&[
                "Wheelchair accessible places nearby",
                "Recommend the best accessible spots",
                "What can you help me with?",
            ]),
        })
    }

    /// Accessibility filter: any-of feature intersection, falling back
    /// to "has any feature at all" when no tags were extracted.
    pub(crate) async fn handle_accessibility(
        &self,
        intent: &Intent,
        location: Option<Coordinates>,
    ) -> Result<ChatResponse, AgentError> {
        let candidates = self.fetch_candidates(intent.category.as_deref()).await?;

        let matching: Vec<_> = if intent.accessibility_features.is_empty() {
            candidates
                .into_iter()
                .filter(|p| !p.features.is_empty())
                .collect()
        } else {
            candidates
                .into_iter()
                .filter(|p| p.has_any_feature(&intent.accessibility_features))
                .collect()
        };

        let places = self.shape(matching, location);
        let message = if places.is_empty() {
            "I couldn't find any places matching those accessibility needs.".to_string()
        } else {
            match &intent.category {
                Some(category) => format!("Here are accessible {category} I found:"),
                None => "Here are accessible places I found:".to_string(),
            }
        };

        Ok(ChatResponse {
            message,
            places,
            suggestions: suggestions(&[
                "Places with elevator access",
                "Braille friendly places",
                "Nearest accessible parking",
            ]),
        })
    }

    pub(crate) async fn handle_category(
        &self,
        intent: &Intent,
        location: Option<Coordinates>,
    ) -> Result<ChatResponse, AgentError> {
        let candidates = self.fetch_candidates(intent.category.as_deref()).await?;
        let places = self.shape(candidates, location);

        let subject = intent.category.as_deref().unwrap_or("matching places");
        let message = if places.is_empty() {
            format!("I couldn't find any {subject} right now.")
        } else {
            format!("Here are some {subject} for you:")
        };

        Ok(ChatResponse {
            message,
            places,
            suggestions: suggestions(&[
                "Wheelchair accessible options",
                "Nearest places to me",
                "Recommend the best places",
            ]),
        })
    }

    /// Specific place: first case-insensitive substring name match, with
    /// a yes/no answer when a concrete feature was asked about.
    pub(crate) async fn handle_specific_place(
        &self,
        intent: &Intent,
    ) -> Result<ChatResponse, AgentError> {
        let name = intent.place_name.clone().unwrap_or_default();
        let needle = name.to_lowercase();

        let candidates = self.fetch_candidates(None).await?;
        let found = candidates
            .into_iter()
            .find(|p| p.name.to_lowercase().contains(&needle));

        let Some(place) = found else {
            return Ok(ChatResponse {
                message: format!(
                    "I couldn't find a place called \"{name}\". It may not be listed yet."
                ),
                places: Vec::new(),
                suggestions: self.default_suggestions(),
            });
        };

        let message = if let Some(tag) = intent.accessibility_features.first() {
            if place.has_feature(tag) {
                format!("Yes, {} has {}.", place.name, feature_label(tag))
            } else {
                format!(
                    "I have no record of {} at {}.",
                    feature_label(tag),
                    place.name
                )
            }
        } else if place.features.is_empty() {
            format!("{} has no recorded accessibility features yet.", place.name)
        } else {
            let listed: Vec<String> = place.features.iter().map(|f| feature_label(f)).collect();
            format!("{} offers: {}.", place.name, listed.join(", "))
        };

        Ok(ChatResponse {
            message,
            places: vec![place],
            suggestions: suggestions(&[
                "Find similar places nearby",
                "Wheelchair accessible restaurants",
            ]),
        })
    }

    /// Recommendation: optional category and feature filters, verified
    /// candidates bubbled to the front (stable), then distance ranking
    /// when a location is present, which supersedes the verified order.
    pub(crate) async fn handle_recommendation(
        &self,
        intent: &Intent,
        location: Option<Coordinates>,
    ) -> Result<ChatResponse, AgentError> {
        let candidates = self.fetch_candidates(intent.category.as_deref()).await?;

        let mut matching: Vec<_> = if intent.accessibility_features.is_empty() {
            candidates
        } else {
            candidates
                .into_iter()
                .filter(|p| p.has_any_feature(&intent.accessibility_features))
                .collect()
        };
        matching.sort_by_key(|p| !p.verified);

        let places = self.shape(matching, location);
        let subject = intent.category.as_deref().unwrap_or("places");
        let message = if places.is_empty() {
            format!("I couldn't find any {subject} to recommend right now.")
        } else {
            format!("Here are some {subject} I'd recommend:")
        };

        Ok(ChatResponse {
            message,
            places,
            suggestions: suggestions(&[
                "Nearest places to me",
                "Places with wheelchair access",
                "Show accessible hotels",
            ]),
        })
    }

    /// General fallback: substring search across name, address,
    /// description and category with the raw lowercased query.
    pub(crate) async fn handle_general(
        &self,
        intent: &Intent,
        location: Option<Coordinates>,
    ) -> Result<ChatResponse, AgentError> {
        let candidates = self.fetch_candidates(None).await?;
        let query = intent.query.as_str();

        let matching: Vec<_> = if query.is_empty() {
            candidates
        } else {
            candidates
                .into_iter()
                .filter(|p| {
                    p.name.to_lowercase().contains(query)
                        || p.address.to_lowercase().contains(query)
                        || p.description.to_lowercase().contains(query)
                        || p.category.to_lowercase().contains(query)
                })
                .collect()
        };

        let places = self.shape(matching, location);
        let message = if places.is_empty() {
            "I couldn't find anything matching that. Try asking about a \
             category like restaurants or hotels."
                .to_string()
        } else {
            "Here's what I found:".to_string()
        };

        Ok(ChatResponse {
            message,
            places,
            suggestions: self.default_suggestions(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;

    use access_chat_config::Settings;
    use access_chat_core::{
        BusinessRecord, Coordinates, Error, PlaceDirectory, PlaceFilter, PlaceRecord,
        StaticDirectory,
    };

    use crate::chatbot::PlaceChatbot;

    const COLOMBO: Coordinates = Coordinates {
        latitude: 6.9271,
        longitude: 79.8612,
    };

    fn place(
        id: &str,
        name: &str,
        category: &str,
        lat: f64,
        lon: f64,
        features: &[&str],
    ) -> PlaceRecord {
        PlaceRecord {
            id: id.to_string(),
            name: name.to_string(),
            address: format!("{name} street"),
            category: category.to_string(),
            description: None,
            latitude: json!(lat),
            longitude: json!(lon),
            accessibility_features: if features.is_empty() {
                None
            } else {
                Some(features.iter().map(|f| f.to_string()).collect())
            },
            images: None,
            phone: None,
            website: None,
            opening_hours: None,
            verified: None,
        }
    }

    fn business(
        id: &str,
        name: &str,
        category: &str,
        lat: f64,
        lon: f64,
        features: &[&str],
        verified: bool,
    ) -> BusinessRecord {
        BusinessRecord {
            id: id.to_string(),
            name: name.to_string(),
            address: format!("{name} road"),
            category: category.to_string(),
            description: None,
            latitude: json!(lat),
            longitude: json!(lon),
            accessibility_features: if features.is_empty() {
                None
            } else {
                Some(features.iter().map(|f| f.to_string()).collect())
            },
            images: None,
            phone: None,
            website: None,
            opening_hours: None,
            verified: Some(verified),
        }
    }

    fn chatbot(directory: StaticDirectory) -> PlaceChatbot {
        PlaceChatbot::new(Arc::new(directory))
    }

    struct FailingDirectory;

    #[async_trait]
    impl PlaceDirectory for FailingDirectory {
        async fn list_places(&self, _filter: &PlaceFilter) -> access_chat_core::Result<Vec<PlaceRecord>> {
            Err(Error::Directory("backend unavailable".to_string()))
        }

        async fn list_businesses(
            &self,
            _filter: &PlaceFilter,
        ) -> access_chat_core::Result<Vec<BusinessRecord>> {
            Err(Error::Directory("backend unavailable".to_string()))
        }
    }

    struct HangingDirectory;

    #[async_trait]
    impl PlaceDirectory for HangingDirectory {
        async fn list_places(&self, _filter: &PlaceFilter) -> access_chat_core::Result<Vec<PlaceRecord>> {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            Ok(Vec::new())
        }

        async fn list_businesses(
            &self,
            _filter: &PlaceFilter,
        ) -> access_chat_core::Result<Vec<BusinessRecord>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_greeting_response() {
        let bot = chatbot(StaticDirectory::new());
        let response = bot.process_message("hello", None).await;

        let expected = access_chat_config::ResponseTemplates::default().welcome;
        assert_eq!(response.message, expected);
        assert!(response.places.is_empty());
        assert_eq!(response.suggestions, bot.default_suggestions());
    }

    #[tokio::test]
    async fn test_nearest_without_location_gives_guidance() {
        let directory = StaticDirectory::new();
        directory.add_place(place("p1", "Cafe One", "restaurants", 6.93, 79.85, &[]));

        let bot = chatbot(directory);
        let response = bot.process_message("nearest restaurant", None).await;

        assert!(response.places.is_empty());
        assert!(response.message.contains("location"));
    }

    #[tokio::test]
    async fn test_nearest_filters_category_and_sets_distance() {
        let directory = StaticDirectory::new();
        // Restaurant roughly 500m north of the origin
        directory.add_place(place(
            "r1",
            "Curry Leaf",
            "restaurants",
            6.9316,
            79.8612,
            &[],
        ));
        // Hotel roughly 200m north; wrong category, must not appear
        directory.add_place(place("h1", "Grand Oriental", "hotels", 6.9289, 79.8612, &[]));

        let bot = chatbot(directory);
        let response = bot
            .process_message("What's the nearest restaurant?", Some(COLOMBO))
            .await;

        assert_eq!(response.places.len(), 1);
        assert_eq!(response.places[0].id, "r1");
        let distance = response.places[0].distance.unwrap();
        assert!((distance - 500.0).abs() < 60.0, "distance was {distance}");
    }

    #[tokio::test]
    async fn test_specific_place_affirmative_feature_answer() {
        let directory = StaticDirectory::new();
        directory.add_business(business(
            "b1",
            "Ministry of Crab",
            "restaurants",
            6.9355,
            79.8438,
            &["wheelchair_accessible"],
            true,
        ));

        let bot = chatbot(directory);
        let response = bot
            .process_message("Does Ministry of Crab have wheelchair access?", None)
            .await;

        assert_eq!(response.places.len(), 1);
        assert!(response.message.starts_with("Yes"));
        assert!(response.message.contains("wheelchair access"));
    }

    #[tokio::test]
    async fn test_specific_place_negative_feature_answer() {
        let directory = StaticDirectory::new();
        directory.add_business(business(
            "b1",
            "Ministry of Crab",
            "restaurants",
            6.9355,
            79.8438,
            &["ramp_access"],
            true,
        ));

        let bot = chatbot(directory);
        let response = bot
            .process_message("Does Ministry of Crab have wheelchair access?", None)
            .await;

        assert_eq!(response.places.len(), 1);
        assert!(response.message.contains("no record"));
    }

    #[tokio::test]
    async fn test_specific_place_not_found() {
        let bot = chatbot(StaticDirectory::new());
        let response = bot
            .process_message("does atlantis have wheelchair access", None)
            .await;

        assert!(response.places.is_empty());
        assert!(response.message.contains("couldn't find"));
        assert_eq!(response.suggestions, bot.default_suggestions());
    }

    #[tokio::test]
    async fn test_accessibility_fallback_needs_some_feature() {
        // No feature tags extracted and no candidate has any feature:
        // the fallback filter finds nothing
        let directory = StaticDirectory::new();
        directory.add_place(place("p1", "Plain Cafe", "restaurants", 6.93, 79.85, &[]));
        directory.add_place(place("p2", "Plain Hotel", "hotels", 6.94, 79.86, &[]));

        let bot = chatbot(directory);
        let response = bot.process_message("accessible places", None).await;

        assert!(response.places.is_empty());
        assert!(response.message.contains("couldn't find"));
    }

    #[tokio::test]
    async fn test_accessibility_any_of_feature_match() {
        let directory = StaticDirectory::new();
        directory.add_place(place(
            "p1",
            "Ramp Cafe",
            "restaurants",
            6.93,
            79.85,
            &["ramp_access"],
        ));
        directory.add_place(place(
            "p2",
            "Stairs Only",
            "restaurants",
            6.94,
            79.86,
            &[],
        ));

        let bot = chatbot(directory);
        let response = bot
            .process_message("restaurants with ramp access", None)
            .await;

        assert_eq!(response.places.len(), 1);
        assert_eq!(response.places[0].id, "p1");
    }

    #[tokio::test]
    async fn test_cap_at_five_across_pool_sizes() {
        for pool in [0usize, 1, 5, 50] {
            let directory = StaticDirectory::new();
            for i in 0..pool {
                directory.add_place(place(
                    &format!("p{i}"),
                    &format!("Park {i}"),
                    "parks",
                    6.9 + i as f64 * 0.001,
                    79.85,
                    &[],
                ));
            }

            let bot = chatbot(directory);
            let response = bot.process_message("parks", Some(COLOMBO)).await;
            assert!(
                response.places.len() <= 5,
                "pool {pool} returned {}",
                response.places.len()
            );
            assert_eq!(response.places.len(), pool.min(5));
        }
    }

    #[tokio::test]
    async fn test_recommendation_verified_first_without_location() {
        let directory = StaticDirectory::new();
        directory.add_business(business(
            "b1",
            "Unverified Diner",
            "restaurants",
            6.93,
            79.85,
            &[],
            false,
        ));
        directory.add_business(business(
            "b2",
            "Verified Diner",
            "restaurants",
            6.99,
            79.99,
            &[],
            true,
        ));

        let bot = chatbot(directory);
        let response = bot
            .process_message("recommend a restaurant for dinner", None)
            .await;

        assert_eq!(response.places[0].id, "b2");
        assert_eq!(response.places[1].id, "b1");
    }

    #[tokio::test]
    async fn test_recommendation_distance_supersedes_verified() {
        let directory = StaticDirectory::new();
        // The unverified diner is closer; with a location it must win
        directory.add_business(business(
            "b1",
            "Unverified Diner",
            "restaurants",
            6.9280,
            79.8612,
            &[],
            false,
        ));
        directory.add_business(business(
            "b2",
            "Verified Diner",
            "restaurants",
            6.99,
            79.99,
            &[],
            true,
        ));

        let bot = chatbot(directory);
        let response = bot
            .process_message("recommend a restaurant for dinner", Some(COLOMBO))
            .await;

        assert_eq!(response.places[0].id, "b1");
    }

    #[tokio::test]
    async fn test_general_substring_search() {
        let directory = StaticDirectory::new();
        directory.add_business(business(
            "b1",
            "Ministry of Crab",
            "restaurants",
            6.9355,
            79.8438,
            &[],
            true,
        ));
        directory.add_place(place("p1", "Viharamahadevi Park", "parks", 6.91, 79.86, &[]));

        let bot = chatbot(directory);
        let response = bot.process_message("ministry of crab", None).await;

        assert_eq!(response.places.len(), 1);
        assert_eq!(response.places[0].id, "b1");
    }

    #[tokio::test]
    async fn test_fetch_failure_becomes_apology() {
        let bot = PlaceChatbot::new(Arc::new(FailingDirectory));
        let response = bot.process_message("nearest restaurant", Some(COLOMBO)).await;

        assert!(response.places.is_empty());
        assert!(response.message.contains("Sorry"));
        assert_eq!(response.suggestions, bot.default_suggestions());
    }

    #[tokio::test]
    async fn test_deadline_expiry_becomes_apology() {
        let mut settings = Settings::default();
        settings.chatbot.response_deadline_ms = Some(50);

        let bot = PlaceChatbot::with_settings(Arc::new(HangingDirectory), settings);
        let response = bot.process_message("any parks around", None).await;

        assert!(response.places.is_empty());
        assert!(response.message.contains("Sorry"));
    }

    #[tokio::test]
    async fn test_empty_category_pool_is_not_an_error() {
        let bot = chatbot(StaticDirectory::new());
        let response = bot.process_message("any museums in town", None).await;

        assert!(response.places.is_empty());
        assert!(response.message.contains("couldn't find"));
        assert!(!response.suggestions.is_empty());
    }
}
