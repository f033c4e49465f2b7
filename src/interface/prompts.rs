use dialoguer::{Confirm, Input, Select};

use crate::error::{HeroError, Result};
use crate::models::{fullness_name, FULLNESS_IDEAL, FULLNESS_MAX, FULLNESS_MIN};
use crate::state::VisitLog;

/// Maximum number of fuzzy suggestions offered at once.
const MAX_SUGGESTIONS: usize = 5;

/// Prompt for a venue name, offering fuzzy matches against known venues.
pub fn prompt_venue(log: &VisitLog) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Where did you eat?")
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Err(HeroError::InvalidInput("Venue name is required".to_string()));
    }

    resolve_venue(log, input)
}

/// Match a typed venue against the log, asking the user to confirm close matches.
///
/// Exact (case-insensitive) matches and unknown names are returned as-is.
pub fn resolve_venue(log: &VisitLog, input: &str) -> Result<String> {
    if log.visits_for(input).is_some() {
        return Ok(input.to_string());
    }

    let candidates = log.suggest_venues(input, MAX_SUGGESTIONS);

    if candidates.is_empty() {
        return Ok(input.to_string());
    }

    if candidates.len() == 1 {
        let name = &candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;

        return Ok(if confirm {
            name.clone()
        } else {
            input.to_string()
        });
    }

    // Multiple matches - let user select
    let options: Vec<String> = candidates.into_iter().map(|(name, _)| name).collect();
    let mut selection_options = options.clone();
    selection_options.push(format!("New venue '{}'", input));

    let selection = Select::new()
        .with_prompt("Which venue did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    Ok(options
        .get(selection)
        .cloned()
        .unwrap_or_else(|| input.to_string()))
}

/// Prompt for food items one at a time until an empty line.
pub fn prompt_food_items() -> Result<Vec<String>> {
    let mut items = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a food item (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        items.push(input.to_string());
    }

    Ok(items)
}

/// Prompt for a post-meal fullness rating.
pub fn prompt_fullness(venue: &str) -> Result<u8> {
    let ratings: Vec<u8> = (FULLNESS_MIN..=FULLNESS_MAX).collect();
    let options: Vec<String> = ratings
        .iter()
        .map(|r| format!("{} ({})", r, fullness_name(*r)))
        .collect();

    let selection = Select::new()
        .with_prompt(format!("How full did '{}' leave you?", venue))
        .items(&options)
        .default((FULLNESS_IDEAL - FULLNESS_MIN) as usize)
        .interact()?;

    ratings
        .get(selection)
        .copied()
        .ok_or_else(|| HeroError::InvalidInput("Invalid fullness selection".to_string()))
}

/// Prompt for optional free-text notes.
pub fn prompt_notes() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Notes (leftovers, portion size...)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok((!input.is_empty()).then(|| input.to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Parse a fullness rating given on the command line.
pub fn parse_fullness(value: u8) -> Result<u8> {
    if (FULLNESS_MIN..=FULLNESS_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(HeroError::InvalidInput(format!(
            "Fullness must be between {} and {}",
            FULLNESS_MIN, FULLNESS_MAX
        )))
    }
}
