use crate::models::{fullness_name, LocationProfile, Visit};
use crate::picker::Pick;
use crate::state::VisitLog;

/// Display a venue profile as a two-column table.
pub fn display_profile(venue: &str, profile: &LocationProfile) {
    println!();
    println!("=== {} ===", venue);
    println!();

    let venue_type = profile
        .restaurant_type
        .map(|t| t.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let rows = [
        ("Cuisine", profile.cuisine_type.clone()),
        ("Venue type", venue_type),
        ("Meal weight", profile.meal_weight.to_string()),
        ("Setting", profile.setting.to_string()),
        ("Meal timing", profile.timing_string()),
        ("Social energy", profile.social_energy.to_string()),
        ("Noise level", profile.noise_level.to_string()),
        ("Price range", profile.price_range.to_string()),
        ("Offerings", profile.main_offerings.join(", ")),
    ];

    for (label, value) in rows {
        println!("  {:<14} {}", label, value);
    }

    println!();
}

/// Display every visit to one venue.
pub fn display_visits(venue: &str, visits: &[Visit], average_fullness: Option<f64>) {
    println!();
    println!("=== {} ({} visits) ===", venue, visits.len());

    for (i, visit) in visits.iter().enumerate() {
        let items = if visit.food_items.is_empty() {
            "(no items)".to_string()
        } else {
            visit.food_items.join(", ")
        };

        println!(
            "{:>3}. {} - fullness {} ({})",
            i + 1,
            items,
            visit.fullness,
            fullness_name(visit.fullness)
        );

        if let Some(notes) = &visit.notes {
            println!("     {}", notes);
        }
    }

    if let Some(avg) = average_fullness {
        println!("Average fullness: {:.1}", avg);
    }
}

/// Display a one-line summary per venue.
pub fn display_venue_list(log: &VisitLog) {
    if log.is_empty() {
        println!("No visits logged yet. Use 'log' to record one.");
        return;
    }

    let venues = log.venues();
    let max_name_len = venues.iter().map(|v| v.len()).max().unwrap_or(10);

    println!();
    println!("=== Visited venues ({}) ===", venues.len());
    println!();

    for venue in venues {
        let count = log.visits_for(venue).map(|v| v.len()).unwrap_or(0);
        let avg = log.average_fullness(venue).unwrap_or(0.0);
        println!(
            "  {:<width$}  {:>2} visits | avg fullness {:.1}",
            venue,
            count,
            avg,
            width = max_name_len
        );
    }

    println!();
}

/// Display a picker result.
pub fn display_pick(pick: &Pick) {
    println!();
    println!("How about... {}!", pick.venue);
    println!(
        "  Usually leaves you {} (avg {:.1})",
        fullness_name(pick.average_fullness.round() as u8),
        pick.average_fullness
    );
    println!("  Try: {}", pick.profile.main_offerings.join(", "));
    println!();
}
