//! Place and business records and the normalized candidate shape
//!
//! Source records arrive from the data layer with inconsistent optional
//! fields and latitude/longitude values that may be numbers or numeric
//! strings. Defaults and coercion are applied exactly once, at the
//! normalization boundary, so downstream ranking and handler code never
//! sees optionality.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Filter shape shared by both source collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceFilter {
    /// Restrict to a normalized category tag (e.g. "restaurants")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl PlaceFilter {
    /// Filter by category
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }
}

/// Raw place record as delivered by the data layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Numeric or numeric-string latitude
    pub latitude: Value,
    /// Numeric or numeric-string longitude
    pub longitude: Value,
    #[serde(default)]
    pub accessibility_features: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
}

/// Raw business record as delivered by the data layer
///
/// Same minimum shape as [`PlaceRecord`], kept as a distinct type so each
/// source collection owns its own optionality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Numeric or numeric-string latitude
    pub latitude: Value,
    /// Numeric or numeric-string longitude
    pub longitude: Value,
    #[serde(default)]
    pub accessibility_features: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
}

/// Provenance tag for a normalized candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceSource {
    Place,
    Business,
}

/// Normalized candidate shape produced from either source collection
///
/// Never mutated after creation, except for the `distance` field which the
/// ranker populates when a caller coordinate is available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Accessibility feature tags (empty when the source omits them)
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub verified: bool,
    /// Which source collection this candidate came from
    #[serde(rename = "type")]
    pub source: PlaceSource,
    /// Distance from the caller in meters, set by the ranker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Place {
    /// Normalize a raw place record
    pub fn from_place(record: PlaceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            address: record.address,
            category: record.category,
            description: record.description.unwrap_or_default(),
            latitude: coerce_coordinate(&record.latitude),
            longitude: coerce_coordinate(&record.longitude),
            features: record.accessibility_features.unwrap_or_default(),
            images: record.images.unwrap_or_default(),
            phone: record.phone,
            website: record.website,
            opening_hours: record.opening_hours,
            verified: record.verified.unwrap_or(false),
            source: PlaceSource::Place,
            distance: None,
        }
    }

    /// Normalize a raw business record
    pub fn from_business(record: BusinessRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            address: record.address,
            category: record.category,
            description: record.description.unwrap_or_default(),
            latitude: coerce_coordinate(&record.latitude),
            longitude: coerce_coordinate(&record.longitude),
            features: record.accessibility_features.unwrap_or_default(),
            images: record.images.unwrap_or_default(),
            phone: record.phone,
            website: record.website,
            opening_hours: record.opening_hours,
            verified: record.verified.unwrap_or(false),
            source: PlaceSource::Business,
            distance: None,
        }
    }

    /// Candidate coordinates (may contain NaN when the source was malformed)
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Whether the candidate carries a given feature tag
    pub fn has_feature(&self, tag: &str) -> bool {
        self.features.iter().any(|f| f == tag)
    }

    /// Whether the candidate carries any of the given feature tags
    pub fn has_any_feature(&self, tags: &[String]) -> bool {
        tags.iter().any(|t| self.has_feature(t))
    }
}

/// Coerce a number-or-string JSON value to f64
///
/// Non-numeric input degrades to NaN instead of failing; the ranker keeps
/// NaN entries in source order.
fn coerce_coordinate(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(raw = %s, "non-numeric coordinate, degrading to NaN");
                f64::NAN
            }
        },
        _ => f64::NAN,
    }
}
