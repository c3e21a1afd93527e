use std::collections::HashSet;
use std::fs;

use ed_synth::io::{REFERRALS_TABLE, STAFF_HOURS_TABLE, VISITS_TABLE, table_path};
use ed_synth::models::{Outcome, parse_visit_id};
use ed_synth::{DataSummary, EdDataGenerator, EdDataset, GeneratorConfig, InvertedRangePolicy, Result, TableFormat};

use crate::utils::{date, first_week_2024, test_config};

/// One week of data: ids, staff rows and referral links
#[test]
fn test_first_week_scenario() -> Result<()> {
    let dataset = first_week_2024(42)?;

    let ids: Vec<u64> = dataset
        .visits
        .iter()
        .map(|v| parse_visit_id(&v.visit_id).expect("well-formed id"))
        .collect();
    let expected: Vec<u64> = (1..=dataset.visits.len() as u64).collect();
    assert_eq!(ids, expected, "ids must run from V000001 without gaps");

    // 15 registrars, one ISO week
    assert_eq!(dataset.staff_hours.len(), 15);
    assert!(dataset.staff_hours.iter().all(|s| s.year == 2024 && s.week == 1));

    assert!(dataset.referrals.len() <= dataset.discharged_count());
    assert_eq!(dataset.referrals.len(), dataset.discharged_count());

    println!("Generated {} visits for the first week of 2024", dataset.visits.len());
    Ok(())
}

#[test]
fn test_visit_invariants_hold() -> Result<()> {
    let dataset = first_week_2024(7)?;

    for visit in &dataset.visits {
        assert!((1..=5).contains(&visit.esi_level.value()));
        assert_eq!(visit.lwbs, visit.outcome == Outcome::Lwbs);
        assert!(visit.door_to_doctor_mins >= 1);
        assert!(visit.length_of_stay_mins >= 30);
        assert!(visit.is_consistent(), "inconsistent visit {visit:?}");
    }
    Ok(())
}

#[test]
fn test_referrals_link_to_discharged_visits() -> Result<()> {
    let dataset = first_week_2024(11)?;

    let discharged: HashSet<&str> = dataset
        .visits
        .iter()
        .filter(|v| v.is_discharged())
        .map(|v| v.visit_id.as_str())
        .collect();

    for referral in &dataset.referrals {
        assert!(discharged.contains(referral.visit_id.as_str()));
    }
    Ok(())
}

/// Same seed and range must give byte-identical CSV files
#[test]
fn test_csv_output_is_deterministic() -> Result<()> {
    let first = tempfile::tempdir()?;
    let second = tempfile::tempdir()?;

    for dir in [first.path(), second.path()] {
        let config = test_config(date(2024, 1, 1), date(2024, 1, 14), 42, dir);
        EdDataGenerator::new(config)?.generate_all_data()?;
    }

    for table in [VISITS_TABLE, STAFF_HOURS_TABLE, REFERRALS_TABLE] {
        let a = fs::read(table_path(first.path(), table, TableFormat::Csv))?;
        let b = fs::read(table_path(second.path(), table, TableFormat::Csv))?;
        assert!(!a.is_empty());
        assert_eq!(a, b, "{table} differs between runs");
    }
    Ok(())
}

#[test]
fn test_csv_header_matches_column_order() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = test_config(date(2024, 3, 1), date(2024, 3, 2), 3, dir.path());
    EdDataGenerator::new(config)?.generate_all_data()?;

    let text = fs::read_to_string(table_path(dir.path(), VISITS_TABLE, TableFormat::Csv))?;
    let header = text.lines().next().expect("header row");
    assert_eq!(header, ed_synth::Visit::COLUMNS.join(","));

    let staff = fs::read_to_string(table_path(dir.path(), STAFF_HOURS_TABLE, TableFormat::Csv))?;
    assert_eq!(
        staff.lines().next().expect("header row"),
        "staff_name,role,specialty,year,week,hours_worked"
    );
    Ok(())
}

#[test]
fn test_summary_json_written_on_request() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = GeneratorConfig::builder()
        .date_range(date(2024, 1, 1), date(2024, 1, 3))
        .seed(5)
        .output_dir(dir.path())
        .write_summary_json(true)
        .show_progress(false)
        .build();

    let (dataset, summary) = EdDataGenerator::new(config)?.generate_all_data()?;
    assert_eq!(summary.total_visits, dataset.visits.len());

    let text = fs::read_to_string(dir.path().join(DataSummary::FILE_NAME))?;
    let back: DataSummary = serde_json::from_str(&text)?;
    assert_eq!(back.total_visits, summary.total_visits);
    Ok(())
}

#[test]
fn test_inverted_range_policies() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let rejected = test_config(date(2024, 1, 7), date(2024, 1, 1), 42, dir.path());
    assert!(EdDataGenerator::new(rejected).is_err());

    let mut tolerated = test_config(date(2024, 1, 7), date(2024, 1, 1), 42, dir.path());
    tolerated.inverted_range = InvertedRangePolicy::Empty;
    let (dataset, summary) = EdDataGenerator::new(tolerated)?.generate_all_data()?;
    assert_eq!(dataset, EdDataset::default());
    assert_eq!(summary.total_visits, 0);

    // Empty tables are still written with their headers
    let loaded = EdDataset::load(dir.path(), TableFormat::Csv)?;
    assert!(loaded.visits.is_empty());
    Ok(())
}
