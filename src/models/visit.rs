use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Lowest and highest fullness ratings.
pub const FULLNESS_MIN: u8 = 1;
pub const FULLNESS_MAX: u8 = 5;

/// The rating a well-portioned meal should land on.
pub const FULLNESS_IDEAL: u8 = 3;

/// Map from fullness rating to human-readable name.
pub static FULLNESS_NAMES: LazyLock<HashMap<u8, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(1, "still hungry");
    m.insert(2, "satisfied");
    m.insert(3, "just right");
    m.insert(4, "full");
    m.insert(5, "stuffed");
    m
});

/// Get the name for a fullness rating.
pub fn fullness_name(rating: u8) -> &'static str {
    FULLNESS_NAMES.get(&rating).copied().unwrap_or("unknown")
}

/// A single logged restaurant visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub venue: String,

    #[serde(default)]
    pub food_items: Vec<String>,

    /// Post-meal fullness, 1 (still hungry) to 5 (stuffed).
    pub fullness: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Visit {
    pub fn new(venue: impl Into<String>, food_items: Vec<String>, fullness: u8) -> Self {
        Self {
            venue: venue.into(),
            food_items,
            fullness,
            notes: None,
        }
    }

    /// Non-blank venue and a fullness rating on the scale.
    pub fn is_valid(&self) -> bool {
        !self.venue.trim().is_empty() && (FULLNESS_MIN..=FULLNESS_MAX).contains(&self.fullness)
    }

    /// Canonical key for lookups (trimmed, lowercase venue).
    pub fn key(&self) -> String {
        venue_key(&self.venue)
    }
}

/// Normalize a venue name into a lookup key.
pub fn venue_key(venue: &str) -> String {
    venue.trim().to_lowercase()
}
