use std::collections::BTreeMap;

use log::debug;
use strsim::jaro_winkler;

use crate::classifier::classify;
use crate::error::{HeroError, Result};
use crate::models::{venue_key, LocationProfile, Visit};

/// Minimum Jaro-Winkler similarity for a fuzzy venue suggestion.
pub const FUZZY_THRESHOLD: f64 = 0.7;

/// Manages logged visits grouped by venue.
pub struct VisitLog {
    /// Visits keyed by normalized venue name, in logging order.
    venues: BTreeMap<String, Vec<Visit>>,
}

impl VisitLog {
    /// Create a log from a list of visits.
    pub fn new(visits: Vec<Visit>) -> Self {
        let mut venues: BTreeMap<String, Vec<Visit>> = BTreeMap::new();
        for visit in visits {
            venues.entry(visit.key()).or_default().push(visit);
        }
        Self { venues }
    }

    /// Record a visit.
    pub fn add_visit(&mut self, visit: Visit) -> Result<()> {
        if !visit.is_valid() {
            return Err(HeroError::InvalidInput(format!(
                "invalid visit to '{}' with fullness {}",
                visit.venue, visit.fullness
            )));
        }

        debug!("Logging visit to '{}'", visit.venue);
        self.venues.entry(visit.key()).or_default().push(visit);
        Ok(())
    }

    /// Visits to a venue (case-insensitive).
    pub fn visits_for(&self, venue: &str) -> Option<&[Visit]> {
        self.venues.get(&venue_key(venue)).map(|v| v.as_slice())
    }

    /// Display names of all venues, using the spelling of the first visit.
    pub fn venues(&self) -> Vec<&str> {
        self.venues
            .values()
            .filter_map(|visits| visits.first())
            .map(|v| v.venue.trim())
            .collect()
    }

    /// Distinct food items across all visits to a venue.
    ///
    /// Dedupe is case-insensitive; the first spelling and order are kept.
    pub fn food_items_for(&self, venue: &str) -> Vec<String> {
        let mut items: Vec<String> = Vec::new();
        let mut seen: Vec<String> = Vec::new();
        for visit in self.visits_for(venue).unwrap_or_default() {
            for item in &visit.food_items {
                let key = item.to_lowercase();
                if !seen.contains(&key) {
                    seen.push(key);
                    items.push(item.clone());
                }
            }
        }
        items
    }

    /// Mean fullness over all visits to a venue.
    pub fn average_fullness(&self, venue: &str) -> Option<f64> {
        let visits = self.visits_for(venue)?;
        if visits.is_empty() {
            return None;
        }
        let total: u32 = visits.iter().map(|v| v.fullness as u32).sum();
        Some(total as f64 / visits.len() as f64)
    }

    /// Classify a venue using every food item logged for it.
    pub fn profile_for(&self, venue: &str) -> Result<LocationProfile> {
        let visits = self
            .visits_for(venue)
            .ok_or_else(|| HeroError::VenueNotFound(venue.to_string()))?;
        let name = visits.first().map(|v| v.venue.trim()).unwrap_or(venue);
        Ok(classify(name, &self.food_items_for(venue)))
    }

    /// Venues whose name resembles `input`, best match first.
    pub fn suggest_venues(&self, input: &str, limit: usize) -> Vec<(String, f64)> {
        let needle = venue_key(input);
        let mut candidates: Vec<(String, f64)> = self
            .venues()
            .into_iter()
            .map(|name| (name.to_string(), jaro_winkler(&venue_key(name), &needle)))
            .filter(|(_, score)| *score > FUZZY_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(limit);
        candidates
    }

    /// Drop a venue and all its visits. Returns how many visits were removed.
    pub fn remove_venue(&mut self, venue: &str) -> Result<usize> {
        self.venues
            .remove(&venue_key(venue))
            .map(|visits| visits.len())
            .ok_or_else(|| HeroError::VenueNotFound(venue.to_string()))
    }

    /// Convert state to a flat list of visits for JSON serialization.
    pub fn to_visits(&self) -> Vec<Visit> {
        self.venues.values().flatten().cloned().collect()
    }

    /// Total number of visits.
    pub fn len(&self) -> usize {
        self.venues.values().map(Vec::len).sum()
    }

    /// Check if no visits are logged.
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}
