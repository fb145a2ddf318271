//! Intent classification
//!
//! Parses free-text input into a structured intent using ordered pattern
//! rules. The type rules are independent gates evaluated in a fixed
//! order and each overwrites the intent type when it matches, so the
//! last matching writer wins; greeting and help short-circuit before any
//! extraction runs. Category and feature extraction are separate
//! accumulator passes that run regardless of which type rule won.
//!
//! Callers depend on the exact gate order, including the overwrite
//! behavior between the nearest/accessibility/recommendation/features
//! gates; the tests at the bottom pin it down.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Intent type, set by the last matching type rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Nearest,
    Accessibility,
    Category,
    SpecificPlace,
    Recommendation,
    Features,
    Greeting,
    Help,
    General,
}

/// Structured interpretation of a free-text query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    /// Response strategy selector
    pub kind: IntentKind,
    /// Normalized category tag (plural, e.g. "restaurants")
    pub category: Option<String>,
    /// Accessibility feature tags, append-only and not deduplicated
    pub accessibility_features: Vec<String>,
    /// Extracted venue name for specific-place queries
    pub place_name: Option<String>,
    /// Whitespace tokens longer than 3 characters, order-preserving
    pub keywords: Vec<String>,
    /// Lowercased, trimmed input; the general handler searches with it
    pub query: String,
}

impl Intent {
    fn general(query: String) -> Self {
        Self {
            kind: IntentKind::General,
            category: None,
            accessibility_features: Vec::new(),
            place_name: None,
            keywords: Vec::new(),
            query,
        }
    }
}

static GREETING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(hi|hello|hey|greetings|good morning|good afternoon|good evening)").unwrap()
});

static HELP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"help|what can you|how do|guide|assist").unwrap());

static NEAREST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"nearest|nearby|closest|close to|near me|around me").unwrap());

static ACCESSIBILITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"accessib|wheelchair|ramp|elevator|lift|braille|disabled|handicap|audio|visual|hearing|parking",
    )
    .unwrap()
});

static RECOMMENDATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"suggest|recommend|good|best|top|popular").unwrap());

static FEATURES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"with|has|have|features|facilities").unwrap());

static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"['"]([^'"]+)['"]"#).unwrap());

static DOES_HAVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"does\s+(.+?)\s+(?:have|has|provide)").unwrap());

static IS_ACCESSIBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"is\s+(.+?)\s+(?:accessible|wheelchair)").unwrap());

/// Feature sub-patterns scanned when the accessibility gate matches.
/// Each is independent; one query may append several tags.
static FEATURE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"wheelchair").unwrap(), "wheelchair_accessible"),
        (Regex::new(r"ramp").unwrap(), "ramp_access"),
        (Regex::new(r"elevator|lift").unwrap(), "elevator"),
        (Regex::new(r"braille").unwrap(), "braille"),
        (Regex::new(r"audio|visual|hearing").unwrap(), "hearing_assistance"),
        (Regex::new(r"parking").unwrap(), "accessible_parking"),
    ]
});

/// Category keyword tables scanned by substring; the first table with
/// any hit wins.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("restaurants", &["restaurant", "food", "eat", "dining", "cafe"]),
    ("hotels", &["hotel", "stay", "accommodation", "lodge", "resort"]),
    ("parks", &["park", "garden", "playground"]),
    ("museums", &["museum", "gallery", "exhibit"]),
    ("shopping", &["shopping", "mall", "shop", "store", "market"]),
    ("transport", &["bus", "train", "station", "transport", "taxi"]),
    (
        "healthcare",
        &["hospital", "clinic", "pharmacy", "doctor", "medical"],
    ),
    (
        "entertainment",
        &["cinema", "movie", "theatre", "theater", "entertainment"],
    ),
    (
        "education",
        &["school", "university", "college", "library", "education"],
    ),
    (
        "government",
        &["government", "office", "embassy", "council", "municipal"],
    ),
];

/// Rule-based intent classifier
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a raw user message
    pub fn classify(&self, input: &str) -> Intent {
        let query = input.trim().to_lowercase();
        let mut intent = Intent::general(query.clone());

        // Greeting and help short-circuit: no extraction side effects
        if GREETING.is_match(&query) {
            intent.kind = IntentKind::Greeting;
            return intent;
        }
        if HELP.is_match(&query) {
            intent.kind = IntentKind::Help;
            return intent;
        }

        // Ordered type gates, last matching writer wins
        let type_rules: [(&Regex, IntentKind); 4] = [
            (&NEAREST, IntentKind::Nearest),
            (&ACCESSIBILITY, IntentKind::Accessibility),
            (&RECOMMENDATION, IntentKind::Recommendation),
            (&FEATURES, IntentKind::Features),
        ];
        for (pattern, kind) in type_rules {
            if pattern.is_match(&query) {
                intent.kind = kind;
            }
        }

        // Feature accumulator, gated on the accessibility pattern
        if ACCESSIBILITY.is_match(&query) {
            for (pattern, tag) in FEATURE_PATTERNS.iter() {
                if pattern.is_match(&query) {
                    intent.accessibility_features.push((*tag).to_string());
                }
            }
        }

        // Category accumulator
        for (tag, keywords) in CATEGORY_KEYWORDS {
            if keywords.iter().any(|k| query.contains(k)) {
                intent.category = Some((*tag).to_string());
                if intent.kind == IntentKind::General {
                    intent.kind = IntentKind::Category;
                }
                break;
            }
        }

        // Place-name extraction; quoted names take priority over the
        // question-shaped fallbacks
        if let Some(captures) = QUOTED
            .captures(&query)
            .or_else(|| DOES_HAVE.captures(&query))
            .or_else(|| IS_ACCESSIBLE.captures(&query))
        {
            intent.place_name = Some(captures[1].trim().to_string());
            intent.kind = IntentKind::SpecificPlace;
        }

        // Keyword pass: unfiltered, unstemmed, order-preserving
        intent.keywords = query
            .split_whitespace()
            .filter(|w| w.len() > 3)
            .map(|w| w.to_string())
            .collect();

        tracing::debug!(kind = ?intent.kind, category = ?intent.category, "classified query");
        intent
    }
}
