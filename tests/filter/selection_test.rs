use std::collections::HashSet;

use chrono::Datelike;
use ed_synth::calendar::{days_in_month, month_display_name};
use ed_synth::{EdDataset, Indicators, Result, Selection, available_months};

use crate::utils::{date, generate};

fn two_months() -> Result<EdDataset> {
    generate(date(2024, 1, 20), date(2024, 2, 10), 42)
}

#[test]
fn test_available_months_sorted_unique() -> Result<()> {
    let batches = two_months()?.to_batches()?;
    let months = available_months(&batches.visits)?;

    assert_eq!(months, vec!["2024-01".to_string(), "2024-02".to_string()]);
    assert_eq!(month_display_name(&months[1])?, "February 2024");
    assert_eq!(days_in_month(2024, 2)?, 29);
    Ok(())
}

#[test]
fn test_month_and_day_range_selection() -> Result<()> {
    let dataset = two_months()?;
    let batches = dataset.to_batches()?;

    let selection = Selection::new("2024-01", 25, 28)?;
    let selected = selection.apply(&batches)?.to_dataset()?;

    let expected = dataset
        .visits
        .iter()
        .filter(|v| v.date.month() == 1 && (25..=28).contains(&v.date.day()))
        .count();
    assert_eq!(selected.visits.len(), expected);
    assert!(expected > 0);
    assert!(
        selected
            .visits
            .iter()
            .all(|v| v.date >= date(2024, 1, 25) && v.date <= date(2024, 1, 28))
    );
    Ok(())
}

#[test]
fn test_referrals_follow_selected_visits() -> Result<()> {
    let dataset = two_months()?;
    let selected = Selection::new("2024-02", 1, 5)?
        .apply(&dataset.to_batches()?)?
        .to_dataset()?;

    let ids: HashSet<&str> = selected.visits.iter().map(|v| v.visit_id.as_str()).collect();
    assert!(selected.referrals.iter().all(|r| ids.contains(r.visit_id.as_str())));

    let expected = dataset
        .referrals
        .iter()
        .filter(|r| ids.contains(r.visit_id.as_str()))
        .count();
    assert_eq!(selected.referrals.len(), expected);
    Ok(())
}

/// February maps to ISO weeks 5..9
#[test]
fn test_staff_hours_use_week_block() -> Result<()> {
    let dataset = two_months()?;
    let selected = Selection::whole_month("2024-02")?
        .apply(&dataset.to_batches()?)?
        .to_dataset()?;

    assert!(!selected.staff_hours.is_empty());
    assert!(
        selected
            .staff_hours
            .iter()
            .all(|s| s.year == 2024 && (5..9).contains(&s.week))
    );
    Ok(())
}

#[test]
fn test_absent_month_gives_empty_tables() -> Result<()> {
    let batches = two_months()?.to_batches()?;
    let selected = Selection::whole_month("2023-06")?.apply(&batches)?;

    assert_eq!(selected.visits.num_rows(), 0);
    assert_eq!(selected.staff_hours.num_rows(), 0);
    assert_eq!(selected.referrals.num_rows(), 0);

    let indicators = Indicators::from_batches(&selected)?;
    assert_eq!(indicators.resources.lwbs_rate_pct, 0.0);
    Ok(())
}

#[test]
fn test_invalid_selections() {
    assert!(Selection::new("2024-01", 10, 3).is_err());
    assert!(Selection::new("2024-01", 0, 3).is_err());
    assert!(Selection::new("24-1x", 1, 3).is_err());
}

#[test]
fn test_indicators_for_selection() -> Result<()> {
    let batches = two_months()?.to_batches()?;
    let selected = Selection::whole_month("2024-01")?.apply(&batches)?;
    let indicators = Indicators::from_batches(&selected)?;

    let outcome_total: u64 = indicators.outputs.outcome_counts.iter().map(|c| c.count).sum();
    assert_eq!(outcome_total as usize, selected.visits.num_rows());
    assert!(indicators.outputs.top_diagnoses.len() <= 4);
    assert!(indicators.outputs.top_departments.len() <= 5);
    assert!(indicators.staffing.top_doctors_by_hours.len() <= 5);
    assert!(
        indicators
            .outputs
            .top_diagnoses
            .windows(2)
            .all(|w| w[0].count >= w[1].count)
    );
    Ok(())
}
