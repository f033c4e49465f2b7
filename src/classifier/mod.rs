//! Keyword-table venue classifier.
//!
//! Maps a venue name plus its food items to a [`crate::models::LocationProfile`]
//! by substring matching against static keyword tables.

pub mod analyze;
pub mod keywords;
pub mod offerings;
pub mod scoring;

pub use analyze::{classify, normalize};
pub use keywords::FoodCategory;
pub use offerings::{assemble_offerings, TARGET_OFFERINGS};
