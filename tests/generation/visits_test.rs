use chrono::{Datelike, Weekday};
use ed_synth::Result;
use ed_synth::algorithm::generation::{VisitModel, generate_visits};
use ed_synth::algorithm::sampling::{WEEKDAY_MEAN_VISITS, WEEKEND_MEAN_VISITS, seeded_rng};
use ed_synth::catalog::find_diagnosis;
use indicatif::ProgressBar;

use crate::utils::{date, generate};

const SEEDS: u64 = 400;

fn mean_single_day_volume(day: chrono::NaiveDate) -> Result<f64> {
    let model = VisitModel::new()?;
    let total: usize = (0..SEEDS)
        .map(|seed| {
            let mut rng = seeded_rng(Some(seed));
            generate_visits(day, day, &model, &mut rng, &ProgressBar::hidden()).len()
        })
        .sum();
    Ok(total as f64 / SEEDS as f64)
}

#[test]
fn test_single_day_weekday_mean() -> Result<()> {
    let wednesday = date(2024, 1, 3);
    assert_eq!(wednesday.weekday(), Weekday::Wed);

    let mean = mean_single_day_volume(wednesday)?;
    println!("Mean weekday volume over {SEEDS} seeds: {mean:.2}");
    assert!((mean - WEEKDAY_MEAN_VISITS).abs() < 1.0);
    Ok(())
}

#[test]
fn test_single_day_weekend_mean() -> Result<()> {
    let saturday = date(2024, 1, 6);
    assert_eq!(saturday.weekday(), Weekday::Sat);

    let mean = mean_single_day_volume(saturday)?;
    println!("Mean weekend volume over {SEEDS} seeds: {mean:.2}");
    assert!((mean - WEEKEND_MEAN_VISITS).abs() < 1.0);
    Ok(())
}

#[test]
fn test_visits_stay_on_their_day() -> Result<()> {
    let dataset = generate(date(2024, 2, 27), date(2024, 3, 2), 9)?;

    let mut previous = date(2024, 2, 27);
    for visit in &dataset.visits {
        assert!(visit.date >= previous, "visits are emitted day by day");
        assert_eq!(visit.arrival_time.date(), visit.date);
        previous = visit.date;
    }
    Ok(())
}

#[test]
fn test_visit_fields_come_from_catalog() -> Result<()> {
    let dataset = generate(date(2024, 5, 1), date(2024, 5, 10), 21)?;

    for visit in &dataset.visits {
        let entry = find_diagnosis(&visit.diagnosis).expect("diagnosis from catalog");
        assert_eq!(entry.department, visit.department);
        assert!(visit.age <= 100);
        assert!((1..=10).contains(&visit.satisfaction_score));
        assert!(visit.patient_name.contains(' '));
    }
    Ok(())
}
