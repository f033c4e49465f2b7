use food_waste_hero_rs::classifier::{classify, TARGET_OFFERINGS};
use food_waste_hero_rs::models::{
    Level, LocationProfile, MealTiming, MealWeight, PriceRange, RestaurantType, Setting,
};

fn no_items(venue: &str) -> LocationProfile {
    classify::<&str>(venue, &[])
}

fn assert_fully_populated(profile: &LocationProfile) {
    assert!(!profile.meal_timing.is_empty(), "meal timing is empty");
    assert!(!profile.main_offerings.is_empty(), "offerings are empty");
    assert!(!profile.cuisine_type.is_empty(), "cuisine label is empty");
}

#[test]
fn test_classification_is_deterministic() {
    let inputs: [(&str, &[&str]); 4] = [
        ("Old Town White Coffee", &["Kaya Toast"]),
        ("Nasi Kandar Line Clear", &["nasi kandar", "ayam goreng"]),
        ("xyz123", &[]),
        ("", &[]),
    ];

    for (venue, items) in inputs {
        assert_eq!(classify(venue, items), classify(venue, items));
    }
}

#[test]
fn test_total_over_empty_and_foreign_input() {
    for venue in ["", "   ", "xyz123", "Ресторан", "レストラン", "!!!"] {
        assert_fully_populated(&no_items(venue));
    }
    assert_fully_populated(&classify("", &["", ""]));
}

#[test]
fn test_kopitiam_keywords() {
    let profile = no_items("Old Town White Coffee");
    assert_ne!(profile.cuisine_type, "Malaysian (Malay)");
    assert!(profile.meal_timing.contains(&MealTiming::Breakfast));
    assert_eq!(profile.restaurant_type, Some(RestaurantType::Kopitiam));
}

#[test]
fn test_heavy_dishes() {
    let profile = classify("Restaurant", &["nasi lemak", "rendang"]);
    assert_eq!(profile.meal_weight, MealWeight::Heavy);
}

#[test]
fn test_caller_offerings_take_priority() {
    let profile = classify("Venue", &["Chicken Rice", "Teh Tarik"]);
    assert_eq!(profile.main_offerings.len(), TARGET_OFFERINGS);
    assert_eq!(&profile.main_offerings[..2], &["Chicken Rice", "Teh Tarik"]);
}

#[test]
fn test_more_than_target_offerings_kept() {
    let items = ["Roti Canai", "Teh Tarik", "Maggi Goreng", "Milo Dinosaur"];
    let profile = classify("Mamak Bistro", &items);
    assert_eq!(profile.main_offerings, items);
}

#[test]
fn test_tie_defaults() {
    let profile = no_items("xyz123");
    assert_eq!(profile.meal_weight, MealWeight::Medium);
    assert_eq!(profile.social_energy, Level::Medium);
    assert_eq!(profile.noise_level, Level::Medium);
    assert_eq!(profile.price_range, PriceRange::Moderate);
    assert_eq!(profile.setting, Setting::CasualIndoor);
    assert_eq!(profile.meal_timing, vec![MealTiming::Lunch, MealTiming::Dinner]);
}

#[test]
fn test_balanced_scores_fall_back_to_defaults() {
    // one heavy ("burger") and one light ("salad") keyword
    let profile = classify("Corner", &["burger", "salad"]);
    assert_eq!(profile.meal_weight, MealWeight::Medium);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(no_items("MAMAK CORNER"), no_items("mamak corner"));
}

#[test]
fn test_rooftop_is_formal_outdoor() {
    let profile = classify("Sky Rooftop Grill", &["wagyu"]);
    assert_eq!(profile.setting, Setting::FormalOutdoor);
    assert_eq!(profile.price_range, PriceRange::Expensive);
}

#[test]
fn test_night_market_supper() {
    let profile = classify("Pasar Malam Taman Connaught", &["Apam Balik", "Satay"]);
    assert_eq!(profile.restaurant_type, Some(RestaurantType::StreetFood));
    assert!(profile.meal_timing.contains(&MealTiming::Supper));
    assert_eq!(profile.setting, Setting::CasualOutdoor);
    assert_eq!(profile.price_range, PriceRange::Budget);
    assert_eq!(profile.cuisine_type, "Malaysian (Malay)");
}

#[test]
fn test_peranakan_label() {
    let profile = classify("Nyonya Colors", &["Ayam Buah Keluak"]);
    assert_eq!(profile.cuisine_type, "Peranakan/Nyonya");
}

#[test]
fn test_indian_filler_offering() {
    let profile = classify("Banana Leaf House", &["Fish Head Curry"]);
    assert_eq!(profile.cuisine_type, "Malaysian (Indian)");
    assert_eq!(profile.main_offerings[0], "Fish Head Curry");
    assert_eq!(profile.main_offerings[1], "Roti canai");
    assert_eq!(profile.main_offerings.len(), 3);
}

#[test]
fn test_bakery_defaults_to_breakfast_and_lunch() {
    let profile = no_items("Tiong Bahru Bakery");
    assert_eq!(profile.restaurant_type, Some(RestaurantType::Bakery));
    assert_eq!(profile.meal_timing, vec![MealTiming::Breakfast, MealTiming::Lunch]);
}

#[test]
fn test_fast_food_defaults_to_lunch_and_dinner() {
    let profile = no_items("KFC");
    assert_eq!(profile.restaurant_type, Some(RestaurantType::FastFood));
    assert_eq!(profile.meal_timing, vec![MealTiming::Lunch, MealTiming::Dinner]);
}

#[test]
fn test_western_filler_offering() {
    let profile = classify("Western Corner", &["Fish and Chips"]);
    assert_eq!(profile.cuisine_type, "Western");
    assert_eq!(
        profile.main_offerings,
        vec!["Fish and Chips", "Grilled mains", "Seafood"]
    );
}
