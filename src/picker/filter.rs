use crate::models::{LocationProfile, MealTiming, MealWeight, PriceRange};

/// Constraints a picked venue's profile must satisfy. Empty fields match anything.
#[derive(Debug, Clone, Default)]
pub struct PickFilter {
    pub timing: Option<MealTiming>,
    pub weight: Option<MealWeight>,
    pub price: Option<PriceRange>,
    /// Case-insensitive substring of the cuisine label.
    pub cuisine: Option<String>,
}

impl PickFilter {
    pub fn matches(&self, profile: &LocationProfile) -> bool {
        if let Some(timing) = self.timing {
            if !profile.serves(timing) {
                return false;
            }
        }
        if self.weight.is_some_and(|w| w != profile.meal_weight) {
            return false;
        }
        if self.price.is_some_and(|p| p != profile.price_range) {
            return false;
        }
        if let Some(cuisine) = &self.cuisine {
            if !profile
                .cuisine_type
                .to_lowercase()
                .contains(&cuisine.to_lowercase())
            {
                return false;
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.timing.is_none()
            && self.weight.is_none()
            && self.price.is_none()
            && self.cuisine.is_none()
    }
}
