use std::collections::HashSet;

use ed_synth::Result;
use ed_synth::algorithm::generation::observed_weeks;
use ed_synth::calendar::year_and_iso_week;
use ed_synth::catalog::roster_size;
use ed_synth::models::StaffRole;

use crate::utils::{date, generate};

#[test]
fn test_one_row_per_member_per_week() -> Result<()> {
    let dataset = generate(date(2024, 1, 1), date(2024, 2, 29), 42)?;
    let weeks = observed_weeks(&dataset.visits);

    println!("{} weeks observed", weeks.len());
    assert_eq!(dataset.staff_hours.len(), roster_size() * weeks.len());
    assert!(dataset.staff_hours.iter().all(|s| s.role == StaffRole::Registrar));
    Ok(())
}

/// Days around new year keep their calendar year next to the ISO week
#[test]
fn test_weeks_across_year_boundary() -> Result<()> {
    let dataset = generate(date(2024, 12, 28), date(2025, 1, 5), 42)?;

    let from_visits: HashSet<(i32, u32)> = dataset
        .visits
        .iter()
        .map(|v| year_and_iso_week(v.date))
        .collect();
    let from_staff: HashSet<(i32, u32)> = dataset
        .staff_hours
        .iter()
        .map(|s| (s.year, s.week))
        .collect();

    assert_eq!(from_visits, from_staff);
    assert!(from_staff.iter().all(|(year, week)| match year {
        2024 => *week == 52 || *week == 1,
        2025 => *week == 1,
        _ => false,
    }));
    Ok(())
}

#[test]
fn test_hours_stay_near_base_values() -> Result<()> {
    let dataset = generate(date(2024, 6, 1), date(2024, 8, 31), 3)?;
    assert!(
        dataset
            .staff_hours
            .iter()
            .all(|s| (4..=38).contains(&s.hours_worked))
    );
    Ok(())
}
