use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{MealTiming, MealWeight, PriceRange};

/// Food Waste Hero — log restaurant visits, classify venues, and pick what to eat.
#[derive(Parser, Debug)]
#[command(name = "food_waste_hero")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the visit log JSON file.
    #[arg(short, long, default_value = "visits.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a venue from its name and food items.
    Classify {
        /// Venue name.
        venue: String,

        /// Food or drink item (repeatable).
        #[arg(short = 'i', long = "item")]
        items: Vec<String>,

        /// Print the profile as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Record a restaurant visit. Missing values are prompted for.
    Log {
        /// Venue name.
        #[arg(long)]
        venue: Option<String>,

        /// Food or drink item ordered (repeatable).
        #[arg(short = 'i', long = "item")]
        items: Vec<String>,

        /// Post-meal fullness, 1 (still hungry) to 5 (stuffed).
        #[arg(long)]
        fullness: Option<u8>,

        /// Free-text notes.
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show logged visits, for all venues or one.
    History {
        /// Venue name.
        venue: Option<String>,
    },

    /// Randomly pick a venue to eat at.
    Pick {
        /// Only venues serving this meal.
        #[arg(long, value_enum)]
        timing: Option<MealTiming>,

        /// Only venues with this meal weight.
        #[arg(long, value_enum)]
        weight: Option<MealWeight>,

        /// Only venues in this price range.
        #[arg(long, value_enum)]
        price: Option<PriceRange>,

        /// Only venues whose cuisine label contains this text.
        #[arg(long)]
        cuisine: Option<String>,

        /// Random seed for a reproducible pick.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Export every venue profile to CSV.
    Export {
        /// Output CSV path.
        output: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::History { venue: None }
    }
}
