use log::debug;

use crate::classifier::keywords::{
    default_timing, SettingBucket, Tier, CUISINE_KEYWORDS, FOOD_CATEGORY_KEYWORDS,
    MEAL_TIMING_KEYWORDS, MEAL_WEIGHT_KEYWORDS, NOISE_LEVEL_KEYWORDS, PRICE_RANGE_KEYWORDS,
    RESTAURANT_TYPE_KEYWORDS, SETTING_KEYWORDS, SOCIAL_ENERGY_KEYWORDS,
};
use crate::classifier::offerings::assemble_offerings;
use crate::classifier::scoring::{
    resolve_multi, resolve_single_winner, resolve_strict, score_table,
};
use crate::models::{Cuisine, Level, LocationProfile, MealWeight, PriceRange, Setting};

/// Lower-case the venue name and items and join them into one search blob.
///
/// The venue name comes first; every piece is separated by a single space.
pub fn normalize<S: AsRef<str>>(venue_name: &str, food_items: &[S]) -> String {
    std::iter::once(venue_name)
        .chain(food_items.iter().map(|s| s.as_ref()))
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classify a venue from its name and the food items associated with it.
///
/// Total and deterministic: every field of the result is populated, falling
/// back to fixed defaults when no keyword matches.
pub fn classify<S: AsRef<str>>(venue_name: &str, food_items: &[S]) -> LocationProfile {
    let text = normalize(venue_name, food_items);

    let restaurant_type = resolve_single_winner(&text, RESTAURANT_TYPE_KEYWORDS);
    let cuisine = resolve_single_winner(&text, CUISINE_KEYWORDS).unwrap_or(Cuisine::Malaysian);

    let weight_scores = score_table(&text, MEAL_WEIGHT_KEYWORDS);
    let meal_weight = match resolve_strict(&weight_scores, Tier::Medium) {
        Tier::High => MealWeight::Heavy,
        Tier::Medium => MealWeight::Medium,
        Tier::Low => MealWeight::Light,
    };

    let setting = resolve_setting(&text);

    let mut meal_timing = resolve_multi(&text, MEAL_TIMING_KEYWORDS);
    if meal_timing.is_empty() {
        meal_timing = default_timing(restaurant_type).to_vec();
    }

    let social_energy = tier_level(resolve_strict(
        &score_table(&text, SOCIAL_ENERGY_KEYWORDS),
        Tier::Medium,
    ));
    let noise_level = tier_level(resolve_strict(
        &score_table(&text, NOISE_LEVEL_KEYWORDS),
        Tier::Medium,
    ));

    let price_scores = score_table(&text, PRICE_RANGE_KEYWORDS);
    let price_range = match resolve_strict(&price_scores, Tier::Medium) {
        Tier::Low => PriceRange::Budget,
        Tier::Medium => PriceRange::Moderate,
        Tier::High => PriceRange::Expensive,
    };

    let categories = resolve_multi(&text, FOOD_CATEGORY_KEYWORDS);
    let items: Vec<String> = food_items.iter().map(|s| s.as_ref().to_string()).collect();
    let main_offerings = assemble_offerings(&items, cuisine, &categories, restaurant_type);

    debug!(
        "Classified '{}': type={:?} cuisine={:?} weight={} setting={} timing={:?}",
        venue_name, restaurant_type, cuisine, meal_weight, setting, meal_timing
    );

    LocationProfile {
        meal_weight,
        setting,
        meal_timing,
        social_energy,
        noise_level,
        main_offerings,
        price_range,
        cuisine_type: cuisine.label().to_string(),
        restaurant_type,
    }
}

/// Resolve formality and placement as two independent binary axes.
fn resolve_setting(text: &str) -> Setting {
    let scores = score_table(text, SETTING_KEYWORDS);

    let axis = |pick: fn(&SettingBucket) -> bool| -> (usize, usize) {
        scores.iter().fold((0, 0), |(yes, no), (bucket, count)| {
            if pick(bucket) {
                (yes + count, no)
            } else {
                (yes, no + count)
            }
        })
    };

    let (formal, casual) = axis(SettingBucket::is_formal);
    let (outdoor, indoor) = axis(SettingBucket::is_outdoor);

    let formal = resolve_strict(&[(true, formal), (false, casual)], false);
    let outdoor = resolve_strict(&[(true, outdoor), (false, indoor)], false);

    Setting::from_axes(formal, outdoor)
}

fn tier_level(tier: Tier) -> Level {
    match tier {
        Tier::High => Level::High,
        Tier::Medium => Level::Medium,
        Tier::Low => Level::Low,
    }
}
