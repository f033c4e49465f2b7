pub mod export;
pub mod prompts;
pub mod render;

pub use export::{profile_rows, write_profiles_csv};
pub use prompts::{
    parse_fullness, prompt_food_items, prompt_fullness, prompt_notes, prompt_venue, prompt_yes_no,
    resolve_venue,
};
pub use render::{display_pick, display_profile, display_venue_list, display_visits};
