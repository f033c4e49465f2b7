pub mod draw;
pub mod filter;

pub use draw::{candidates, pick_venue, pick_weight, Pick};
pub use filter::PickFilter;
