pub mod profile;
pub mod visit;

pub use profile::{
    Cuisine, Level, LocationProfile, MealTiming, MealWeight, PriceRange, RestaurantType, Setting,
};
pub use visit::{fullness_name, venue_key, Visit, FULLNESS_IDEAL, FULLNESS_MAX, FULLNESS_MIN};
