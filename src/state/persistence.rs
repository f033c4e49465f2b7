use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::Result;
use crate::models::Visit;

/// Load visits from a JSON file.
///
/// A missing file is an empty log. Invalid entries are skipped.
pub fn load_visits<P: AsRef<Path>>(path: P) -> Result<Vec<Visit>> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No visit log at {}, starting empty", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let visits: Vec<Visit> = serde_json::from_str(&content)?;

    let (valid, invalid): (Vec<Visit>, Vec<Visit>) =
        visits.into_iter().partition(Visit::is_valid);
    for visit in &invalid {
        warn!(
            "Skipping invalid visit to '{}' (fullness {})",
            visit.venue, visit.fullness
        );
    }

    info!("Loaded {} visits from {}", valid.len(), path.display());
    Ok(valid)
}

/// Save visits to a JSON file.
pub fn save_visits<P: AsRef<Path>>(path: P, visits: &[Visit]) -> Result<()> {
    let json = serde_json::to_string_pretty(visits)?;
    fs::write(path.as_ref(), json)?;
    info!("Saved {} visits to {}", visits.len(), path.as_ref().display());
    Ok(())
}
