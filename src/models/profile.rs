use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How filling the typical dishes at a venue are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MealWeight {
    Light,
    Medium,
    Heavy,
}

/// Ambience classification on the formality and placement axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Setting {
    #[serde(rename = "formal indoor")]
    FormalIndoor,
    #[serde(rename = "formal outdoor")]
    FormalOutdoor,
    #[serde(rename = "casual indoor")]
    CasualIndoor,
    #[serde(rename = "casual outdoor")]
    CasualOutdoor,
}

impl Setting {
    /// Combine the two resolved axes into a setting.
    pub fn from_axes(formal: bool, outdoor: bool) -> Self {
        match (formal, outdoor) {
            (true, false) => Setting::FormalIndoor,
            (true, true) => Setting::FormalOutdoor,
            (false, false) => Setting::CasualIndoor,
            (false, true) => Setting::CasualOutdoor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Setting::FormalIndoor => "formal indoor",
            Setting::FormalOutdoor => "formal outdoor",
            Setting::CasualIndoor => "casual indoor",
            Setting::CasualOutdoor => "casual outdoor",
        }
    }
}

/// A meal occasion. Declaration order is the canonical display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MealTiming {
    Breakfast,
    Lunch,
    Dinner,
    Supper,
}

impl MealTiming {
    pub const ALL: [MealTiming; 4] = [
        MealTiming::Breakfast,
        MealTiming::Lunch,
        MealTiming::Dinner,
        MealTiming::Supper,
    ];
}

/// Three-level intensity used for both social energy and noise level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    Budget,
    Moderate,
    Expensive,
}

/// Kind of establishment, resolved from the venue name and items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RestaurantType {
    Mamak,
    Kopitiam,
    Hawker,
    Restaurant,
    FastFood,
    Bakery,
    Catering,
    Buffet,
    StreetFood,
    FancyDining,
}

impl RestaurantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestaurantType::Mamak => "mamak",
            RestaurantType::Kopitiam => "kopitiam",
            RestaurantType::Hawker => "hawker",
            RestaurantType::Restaurant => "restaurant",
            RestaurantType::FastFood => "fast food",
            RestaurantType::Bakery => "bakery",
            RestaurantType::Catering => "catering",
            RestaurantType::Buffet => "buffet",
            RestaurantType::StreetFood => "street food",
            RestaurantType::FancyDining => "fine dining",
        }
    }
}

/// Internal cuisine key. Display labels come from [`Cuisine::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cuisine {
    Malaysian,
    Malay,
    Chinese,
    Indian,
    Peranakan,
    Western,
    Japanese,
    Korean,
    Thai,
    Vietnamese,
    MiddleEastern,
    Indonesian,
}

impl Cuisine {
    /// Formatted display label.
    ///
    /// Malaysian sub-cuisines get a qualified label; everything else is the
    /// title-cased key.
    pub fn label(&self) -> &'static str {
        match self {
            Cuisine::Malaysian => "Malaysian",
            Cuisine::Malay => "Malaysian (Malay)",
            Cuisine::Chinese => "Malaysian (Chinese)",
            Cuisine::Indian => "Malaysian (Indian)",
            Cuisine::Peranakan => "Peranakan/Nyonya",
            Cuisine::Western => "Western",
            Cuisine::Japanese => "Japanese",
            Cuisine::Korean => "Korean",
            Cuisine::Thai => "Thai",
            Cuisine::Vietnamese => "Vietnamese",
            Cuisine::MiddleEastern => "Middle Eastern",
            Cuisine::Indonesian => "Indonesian",
        }
    }
}

macro_rules! impl_display_lowercase {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let s = format!("{:?}", self).to_lowercase();
                    f.write_str(&s)
                }
            }
        )*
    };
}

impl_display_lowercase!(MealWeight, MealTiming, Level, PriceRange);

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RestaurantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical profile of a venue.
///
/// Built fresh by [`crate::classifier::classify`]; every field is always
/// populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationProfile {
    pub meal_weight: MealWeight,
    pub setting: Setting,
    pub meal_timing: Vec<MealTiming>,
    pub social_energy: Level,
    pub noise_level: Level,
    pub main_offerings: Vec<String>,
    pub price_range: PriceRange,
    pub cuisine_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_type: Option<RestaurantType>,
}

impl LocationProfile {
    /// Whether the venue serves the given meal occasion.
    pub fn serves(&self, timing: MealTiming) -> bool {
        self.meal_timing.contains(&timing)
    }

    /// Meal timings as a comma-separated list.
    pub fn timing_string(&self) -> String {
        self.meal_timing
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_from_axes() {
        assert_eq!(Setting::from_axes(false, false), Setting::CasualIndoor);
        assert_eq!(Setting::from_axes(true, true), Setting::FormalOutdoor);
        assert_eq!(Setting::CasualOutdoor.to_string(), "casual outdoor");
    }

    #[test]
    fn test_cuisine_labels() {
        assert_eq!(Cuisine::Malay.label(), "Malaysian (Malay)");
        assert_eq!(Cuisine::Peranakan.label(), "Peranakan/Nyonya");
        assert_eq!(Cuisine::MiddleEastern.label(), "Middle Eastern");
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = LocationProfile {
            meal_weight: MealWeight::Heavy,
            setting: Setting::CasualOutdoor,
            meal_timing: vec![MealTiming::Lunch, MealTiming::Supper],
            social_energy: Level::High,
            noise_level: Level::Medium,
            main_offerings: vec!["Satay".to_string()],
            price_range: PriceRange::Budget,
            cuisine_type: "Malaysian (Malay)".to_string(),
            restaurant_type: Some(RestaurantType::StreetFood),
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["mealWeight"], "heavy");
        assert_eq!(json["setting"], "casual outdoor");
        assert_eq!(json["mealTiming"][1], "supper");
        assert_eq!(json["priceRange"], "budget");
        assert_eq!(json["restaurantType"], "streetFood");
    }
}
