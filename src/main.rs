use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use food_waste_hero_rs::classifier::classify;
use food_waste_hero_rs::cli::{Cli, Command};
use food_waste_hero_rs::error::{HeroError, Result};
use food_waste_hero_rs::interface::{
    display_pick, display_profile, display_venue_list, display_visits, parse_fullness,
    profile_rows, prompt_food_items, prompt_fullness, prompt_notes, prompt_venue, prompt_yes_no,
    resolve_venue, write_profiles_csv,
};
use food_waste_hero_rs::models::Visit;
use food_waste_hero_rs::picker::{pick_venue, PickFilter};
use food_waste_hero_rs::state::{load_visits, save_visits, VisitLog};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Classify { venue, items, json } => cmd_classify(&venue, &items, json),
        Command::Log {
            venue,
            items,
            fullness,
            notes,
        } => cmd_log(&cli.file, venue, items, fullness, notes),
        Command::History { venue } => cmd_history(&cli.file, venue.as_deref()),
        Command::Pick {
            timing,
            weight,
            price,
            cuisine,
            seed,
        } => {
            let filter = PickFilter {
                timing,
                weight,
                price,
                cuisine,
            };
            cmd_pick(&cli.file, &filter, seed)
        }
        Command::Export { output } => cmd_export(&cli.file, &output),
    }
}

/// Classify a venue without touching the visit log.
fn cmd_classify(venue: &str, items: &[String], json: bool) -> Result<()> {
    let profile = classify(venue, items);

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        display_profile(venue, &profile);
    }

    Ok(())
}

/// Record a visit, prompting for anything not given on the command line.
fn cmd_log(
    file_path: &str,
    venue: Option<String>,
    items: Vec<String>,
    fullness: Option<u8>,
    notes: Option<String>,
) -> Result<()> {
    let path = Path::new(file_path);
    let mut log = VisitLog::new(load_visits(path)?);
    let interactive = venue.is_none();

    let venue = match venue {
        Some(v) => resolve_venue(&log, v.trim())?,
        None => prompt_venue(&log)?,
    };

    let items = if items.is_empty() && interactive {
        prompt_food_items()?
    } else {
        items
    };

    let fullness = match fullness {
        Some(f) => parse_fullness(f)?,
        None => prompt_fullness(&venue)?,
    };

    let notes = match notes {
        Some(n) => Some(n),
        None if interactive => prompt_notes()?,
        None => None,
    };

    let mut visit = Visit::new(venue.clone(), items, fullness);
    visit.notes = notes;
    log.add_visit(visit)?;

    save_visits(path, &log.to_visits())?;
    println!("Logged visit to {}.", venue);

    if interactive && prompt_yes_no("Show venue profile?", false)? {
        display_profile(&venue, &log.profile_for(&venue)?);
    }

    Ok(())
}

/// Show visits and profile for one venue, or a summary of all venues.
fn cmd_history(file_path: &str, venue: Option<&str>) -> Result<()> {
    let log = VisitLog::new(load_visits(file_path)?);

    let Some(venue) = venue else {
        display_venue_list(&log);
        return Ok(());
    };

    let visits = log
        .visits_for(venue)
        .ok_or_else(|| HeroError::VenueNotFound(venue.to_string()))?;

    display_visits(venue, visits, log.average_fullness(venue));
    display_profile(venue, &log.profile_for(venue)?);

    Ok(())
}

/// Suggest a random venue from the log.
fn cmd_pick(file_path: &str, filter: &PickFilter, seed: Option<u64>) -> Result<()> {
    let log = VisitLog::new(load_visits(file_path)?);

    if log.is_empty() {
        return Err(HeroError::NoVisits);
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    match pick_venue(&log, filter, &mut rng) {
        Some(pick) => display_pick(&pick),
        None if filter.is_empty() => println!("No venue could be picked from the log."),
        None => println!("No visited venue matches those filters."),
    }

    Ok(())
}

/// Export every venue profile to CSV.
fn cmd_export(file_path: &str, output: &Path) -> Result<()> {
    let log = VisitLog::new(load_visits(file_path)?);

    if log.is_empty() {
        return Err(HeroError::NoVisits);
    }

    let rows = profile_rows(&log)?;
    write_profiles_csv(&rows, output)?;
    println!("Exported {} venues to {}", rows.len(), output.display());

    Ok(())
}
