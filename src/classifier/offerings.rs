use log::debug;

use crate::classifier::keywords::{
    FoodCategory, CUISINE_FILLERS, GENERIC_OFFERING, TYPE_OFFERINGS,
};
use crate::models::{Cuisine, RestaurantType};

/// Number of offerings backfill aims for.
pub const TARGET_OFFERINGS: usize = 3;

/// Assemble the signature offerings for a venue.
///
/// Caller items are kept verbatim and in order. While short of
/// [`TARGET_OFFERINGS`], the cuisine filler is tried first, then matched food
/// categories. Venue-type defaults only apply when nothing else produced an
/// offering.
pub fn assemble_offerings(
    food_items: &[String],
    cuisine: Cuisine,
    categories: &[FoodCategory],
    restaurant_type: Option<RestaurantType>,
) -> Vec<String> {
    let mut offerings: Vec<String> = food_items.to_vec();

    if offerings.len() < TARGET_OFFERINGS {
        if let Some((filler, related)) = CUISINE_FILLERS.get(&cuisine) {
            if !contains_any(&offerings, related) {
                debug!("Adding cuisine filler '{}'", filler);
                offerings.push(filler.to_string());
            }
        }
    }

    for category in categories {
        if offerings.len() >= TARGET_OFFERINGS {
            break;
        }
        let name = category.display_name();
        if !offerings.iter().any(|o| o.eq_ignore_ascii_case(name)) {
            offerings.push(name.to_string());
        }
    }

    if offerings.is_empty() {
        let defaults = restaurant_type
            .and_then(|t| TYPE_OFFERINGS.get(&t).copied())
            .unwrap_or(&[GENERIC_OFFERING]);
        offerings.extend(defaults.iter().map(|s| s.to_string()));
    }

    offerings
}

/// Whether any offering contains any of the keywords (case-insensitive).
fn contains_any(offerings: &[String], keywords: &[&str]) -> bool {
    offerings.iter().any(|offering| {
        let lower = offering.to_lowercase();
        keywords.iter().any(|kw| lower.contains(*kw))
    })
}
