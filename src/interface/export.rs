use std::path::Path;

use log::info;

use crate::error::Result;
use crate::models::LocationProfile;
use crate::state::VisitLog;

/// Separator for list-valued columns.
const LIST_SEPARATOR: &str = "; ";

/// Write one CSV row per venue with its profile.
pub fn write_profiles_csv(rows: &[(String, LocationProfile)], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "venue",
        "cuisine_type",
        "restaurant_type",
        "meal_weight",
        "setting",
        "meal_timing",
        "social_energy",
        "noise_level",
        "price_range",
        "main_offerings",
    ])?;

    for (venue, profile) in rows {
        let timing: Vec<String> = profile.meal_timing.iter().map(|t| t.to_string()).collect();
        wtr.write_record([
            venue.clone(),
            profile.cuisine_type.clone(),
            profile
                .restaurant_type
                .map(|t| t.to_string())
                .unwrap_or_default(),
            profile.meal_weight.to_string(),
            profile.setting.to_string(),
            timing.join(LIST_SEPARATOR),
            profile.social_energy.to_string(),
            profile.noise_level.to_string(),
            profile.price_range.to_string(),
            profile.main_offerings.join(LIST_SEPARATOR),
        ])?;
    }

    wtr.flush()?;
    info!("Wrote {} venue profiles to {}", rows.len(), path.display());
    Ok(())
}

/// Classify every venue in the log, in venue order.
pub fn profile_rows(log: &VisitLog) -> Result<Vec<(String, LocationProfile)>> {
    log.venues()
        .into_iter()
        .map(|venue| log.profile_for(venue).map(|p| (venue.to_string(), p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Visit;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_writes_header_and_rows() {
        let log = VisitLog::new(vec![
            Visit::new("Mamak Corner", vec![], 4),
            Visit::new("Sushi Zanmai", vec!["Salmon Sashimi".to_string()], 3),
        ]);
        let rows = profile_rows(&log).unwrap();
        assert_eq!(rows.len(), 2);

        let file = NamedTempFile::new().unwrap();
        write_profiles_csv(&rows, file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(&headers[0], "venue");
        assert_eq!(&headers[5], "meal_timing");

        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "Mamak Corner");
        assert_eq!(&records[0][2], "mamak");
        assert_eq!(&records[0][5], "breakfast; lunch; dinner; supper");
        assert_eq!(&records[1][1], "Japanese");
    }
}
