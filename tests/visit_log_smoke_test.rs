use food_waste_hero_rs::interface::{profile_rows, write_profiles_csv};
use food_waste_hero_rs::models::{MealTiming, MealWeight, Visit};
use food_waste_hero_rs::picker::{candidates, pick_venue, PickFilter};
use food_waste_hero_rs::state::{load_visits, save_visits, VisitLog};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

fn item(name: &str) -> String {
    name.to_string()
}

fn sample_visits() -> Vec<Visit> {
    vec![
        Visit::new(
            "Nasi Kandar Line Clear",
            vec![item("Nasi Kandar"), item("Ayam Goreng")],
            5,
        ),
        Visit::new("Kim Gary Cafe", vec![item("Baked Rice"), item("Milk Tea")], 3),
        Visit::new("Old Town White Coffee", vec![item("Kaya Toast")], 2),
        Visit::new("nasi kandar line clear", vec![item("Teh Tarik")], 4),
    ]
}

#[test]
fn test_log_survives_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("visits.json");

    let mut log = VisitLog::new(load_visits(&path).unwrap());
    assert!(log.is_empty());

    for visit in sample_visits() {
        log.add_visit(visit).unwrap();
    }
    save_visits(&path, &log.to_visits()).unwrap();

    let reloaded = VisitLog::new(load_visits(&path).unwrap());
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.venues().len(), 3);
    assert_eq!(
        reloaded.food_items_for("NASI KANDAR LINE CLEAR"),
        vec!["Nasi Kandar", "Ayam Goreng", "Teh Tarik"]
    );
}

#[test]
fn test_profiles_use_accumulated_items() {
    let log = VisitLog::new(sample_visits());
    let profile = log.profile_for("Nasi Kandar Line Clear").unwrap();
    assert_eq!(profile.meal_weight, MealWeight::Heavy);
    assert_eq!(profile.main_offerings.len(), 3);
    assert_eq!(profile.main_offerings[2], "Teh Tarik");
}

#[test]
fn test_picker_respects_timing_filter() {
    let log = VisitLog::new(sample_visits());
    let filter = PickFilter {
        timing: Some(MealTiming::Breakfast),
        ..Default::default()
    };

    let pool = candidates(&log, &filter);
    assert!(!pool.is_empty());
    assert!(pool.iter().all(|p| p.profile.serves(MealTiming::Breakfast)));

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..25 {
        let pick = pick_venue(&log, &filter, &mut rng).unwrap();
        assert!(pool.iter().any(|p| p.venue == pick.venue));
    }
}

#[test]
fn test_picker_prefers_just_right_portions() {
    let log = VisitLog::new(sample_visits());
    let pool = candidates(&log, &PickFilter::default());

    let weight_of = |venue: &str| {
        pool.iter()
            .find(|p| p.venue == venue)
            .map(|p| p.weight)
            .unwrap()
    };

    assert!(weight_of("Kim Gary Cafe") > weight_of("Nasi Kandar Line Clear"));
    assert!(weight_of("Kim Gary Cafe") > weight_of("Old Town White Coffee"));
}

#[test]
fn test_export_one_row_per_venue() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("profiles.csv");

    let log = VisitLog::new(sample_visits());
    let rows = profile_rows(&log).unwrap();
    write_profiles_csv(&rows, &out).unwrap();

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    assert_eq!(rdr.records().count(), 3);
}
