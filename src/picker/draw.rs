use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{LocationProfile, FULLNESS_IDEAL};
use crate::picker::filter::PickFilter;
use crate::state::VisitLog;

/// A venue suggestion.
#[derive(Debug, Clone)]
pub struct Pick {
    pub venue: String,
    pub profile: LocationProfile,
    pub average_fullness: f64,
    pub weight: f64,
}

/// Draw weight for a venue given how full its meals left the diner.
///
/// Peaks at 1.0 for "just right" and falls off on both sides, so venues that
/// tend to cause leftovers (or leave the diner hungry) come up less often.
pub fn pick_weight(average_fullness: f64) -> f64 {
    1.0 / (1.0 + (average_fullness - FULLNESS_IDEAL as f64).abs())
}

/// All venues in the log that satisfy the filter, with their draw weights.
pub fn candidates(log: &VisitLog, filter: &PickFilter) -> Vec<Pick> {
    log.venues()
        .into_iter()
        .filter_map(|venue| {
            let profile = log.profile_for(venue).ok()?;
            if !filter.matches(&profile) {
                return None;
            }
            let average_fullness = log.average_fullness(venue)?;
            Some(Pick {
                venue: venue.to_string(),
                profile,
                average_fullness,
                weight: pick_weight(average_fullness),
            })
        })
        .collect()
}

/// Randomly pick a venue to eat at.
///
/// Returns `None` when the log is empty or no venue passes the filter.
pub fn pick_venue(log: &VisitLog, filter: &PickFilter, rng: &mut impl Rng) -> Option<Pick> {
    let pool = candidates(log, filter);
    debug!("Picking from {} candidate venues", pool.len());

    pool.choose_weighted(rng, |p| p.weight).ok().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealTiming, Visit};
    use assert_float_eq::assert_float_absolute_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_log() -> VisitLog {
        VisitLog::new(vec![
            Visit::new("Restoran Rahmat", vec!["Nasi Lemak".to_string()], 3),
            Visit::new("Old Town White Coffee", vec!["Kaya Toast".to_string()], 2),
            Visit::new("Omakase Hanare", vec!["Sashimi".to_string()], 5),
        ])
    }

    #[test]
    fn test_pick_weight() {
        assert_float_absolute_eq!(pick_weight(3.0), 1.0, 1e-9);
        assert_float_absolute_eq!(pick_weight(5.0), 1.0 / 3.0, 1e-9);
        assert_float_absolute_eq!(pick_weight(1.0), pick_weight(5.0), 1e-9);
        assert!(pick_weight(4.0) < pick_weight(3.5));
    }

    #[test]
    fn test_empty_log_picks_nothing() {
        let log = VisitLog::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_venue(&log, &PickFilter::default(), &mut rng).is_none());
    }

    #[test]
    fn test_unmatched_filter_picks_nothing() {
        let log = sample_log();
        let filter = PickFilter {
            cuisine: Some("Korean".to_string()),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_venue(&log, &filter, &mut rng).is_none());
    }

    #[test]
    fn test_filter_narrows_candidates() {
        let log = sample_log();
        let filter = PickFilter {
            timing: Some(MealTiming::Dinner),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let pick = pick_venue(&log, &filter, &mut rng).unwrap();
            assert_eq!(pick.venue, "Omakase Hanare");
        }
    }

    #[test]
    fn test_seeded_picks_are_reproducible() {
        let log = sample_log();
        let filter = PickFilter::default();

        let draw = |seed: u64| -> Vec<String> {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| pick_venue(&log, &filter, &mut rng).unwrap().venue)
                .collect()
        };

        assert_eq!(draw(123), draw(123));
    }
}
