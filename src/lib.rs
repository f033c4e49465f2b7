pub mod classifier;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod picker;
pub mod state;

pub use classifier::classify;
pub use error::{HeroError, Result};
pub use models::{LocationProfile, Visit};
