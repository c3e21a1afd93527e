//! Weekly staff hours generation
//!
//! Every rostered staff member gets one record for every (year, ISO week)
//! pair that occurs in the visit table, whether or not that week was busy.

use itertools::Itertools;
use rand::Rng;

use crate::algorithm::sampling::pick;
use crate::calendar::year_and_iso_week;
use crate::catalog::{BASE_WEEKLY_HOURS, ROSTER_ROLE, roster_members};
use crate::models::{StaffHours, Visit};

/// Maximum deviation from the base weekly hours, either direction
pub const HOURS_JITTER: i32 = 2;

/// Distinct `(calendar year, ISO week)` pairs present in the visits
///
/// Years appear in first-seen order, and weeks in first-seen order within
/// each year.
#[must_use]
pub fn observed_weeks(visits: &[Visit]) -> Vec<(i32, u32)> {
    let keys: Vec<(i32, u32)> = visits.iter().map(|v| year_and_iso_week(v.date)).collect();

    keys.iter()
        .map(|(year, _)| *year)
        .unique()
        .flat_map(|year| {
            keys.iter()
                .filter(move |(y, _)| *y == year)
                .map(|(_, week)| *week)
                .unique()
                .map(move |week| (year, week))
        })
        .collect()
}

/// Draw one week's hours: base from the fixed set, jittered, floored at zero
pub fn weekly_hours<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    let base = *pick(&BASE_WEEKLY_HOURS, rng) as i32;
    let jitter = rng.random_range(-HOURS_JITTER..=HOURS_JITTER);
    (base + jitter).max(0) as u32
}

/// Generate staff hours for every roster member and every observed week
pub fn generate_staff_hours<R: Rng + ?Sized>(visits: &[Visit], rng: &mut R) -> Vec<StaffHours> {
    let weeks = observed_weeks(visits);

    roster_members()
        .flat_map(|(specialty, name)| weeks.iter().map(move |week| (specialty, name, *week)))
        .map(|(specialty, name, (year, week))| StaffHours {
            staff_name: name.to_string(),
            role: ROSTER_ROLE,
            specialty: specialty.to_string(),
            year,
            week,
            hours_worked: weekly_hours(rng),
        })
        .collect()
}
