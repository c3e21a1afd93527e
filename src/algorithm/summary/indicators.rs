//! Dashboard indicators for a selection of visits and staff hours
//!
//! Four groups of figures back the dashboard cards: staffing, processing,
//! outputs and resources. Count rankings are ordered by count descending,
//! then by name ascending.

use std::collections::BTreeMap;

use chrono::Datelike;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::summary::{mean, percentage};
use crate::error::Result;
use crate::io::DatasetBatches;
use crate::models::{Outcome, StaffHours, Visit};

const TOP_DOCTORS: usize = 5;
const TOP_DIAGNOSES: usize = 4;
const TOP_DEPARTMENTS: usize = 5;
const MINUTES_PER_HOUR: f64 = 60.0;

/// A label with the number of times it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCount {
    pub name: String,
    pub count: u64,
}

/// Count occurrences and rank them, keeping at most `limit` entries
pub fn ranked_counts<I, S>(items: I, limit: Option<usize>) -> Vec<RankedCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let counts = items
        .into_iter()
        .map(|item| item.as_ref().to_string())
        .counts();
    ranked_totals(counts.into_iter().map(|(name, n)| (name, n as u64)), limit)
}

/// Rank pre-aggregated totals, keeping at most `limit` entries
fn ranked_totals<I>(totals: I, limit: Option<usize>) -> Vec<RankedCount>
where
    I: IntoIterator<Item = (String, u64)>,
{
    totals
        .into_iter()
        .map(|(name, count)| RankedCount { name, count })
        .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Mean of values grouped by key
fn grouped_means<K, I>(pairs: I) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for (key, value) in pairs {
        groups.entry(key).or_default().push(value);
    }
    groups
        .into_iter()
        .map(|(key, values)| (key, mean(values)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffingIndicators {
    pub distinct_staff: usize,
    pub records_per_role: Vec<RankedCount>,
    /// Hours of Consultants, Registrars and Medical Officers
    pub total_doctor_hours: u64,
    pub top_doctors_by_hours: Vec<RankedCount>,
}

impl StaffingIndicators {
    #[must_use]
    pub fn compute(staff_hours: &[StaffHours]) -> Self {
        let doctors: Vec<&StaffHours> = staff_hours.iter().filter(|s| s.role.is_doctor()).collect();

        let mut hours_by_doctor: FxHashMap<&str, u64> = FxHashMap::default();
        for record in &doctors {
            *hours_by_doctor.entry(record.staff_name.as_str()).or_default() +=
                u64::from(record.hours_worked);
        }

        Self {
            distinct_staff: staff_hours.iter().map(|s| s.staff_name.as_str()).unique().count(),
            records_per_role: ranked_counts(staff_hours.iter().map(|s| s.role.as_str()), None),
            total_doctor_hours: doctors.iter().map(|s| u64::from(s.hours_worked)).sum(),
            top_doctors_by_hours: ranked_totals(
                hours_by_doctor
                    .into_iter()
                    .map(|(name, hours)| (name.to_string(), hours)),
                Some(TOP_DOCTORS),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingIndicators {
    pub avg_door_to_doctor_mins: f64,
    pub avg_door_to_doctor_by_esi: BTreeMap<u8, f64>,
    pub labs_pct: f64,
    pub imaging_pct: f64,
    pub consult_pct: f64,
    pub avg_door_to_doctor_by_day: BTreeMap<u32, f64>,
}

impl ProcessingIndicators {
    #[must_use]
    pub fn compute(visits: &[Visit]) -> Self {
        let total = visits.len();

        Self {
            avg_door_to_doctor_mins: mean(visits.iter().map(|v| f64::from(v.door_to_doctor_mins))),
            avg_door_to_doctor_by_esi: grouped_means(
                visits.iter().map(|v| (v.esi_level.value(), f64::from(v.door_to_doctor_mins))),
            ),
            labs_pct: percentage(visits.iter().filter(|v| v.needs_labs).count(), total),
            imaging_pct: percentage(visits.iter().filter(|v| v.needs_imaging).count(), total),
            consult_pct: percentage(visits.iter().filter(|v| v.needs_consult).count(), total),
            avg_door_to_doctor_by_day: grouped_means(
                visits.iter().map(|v| (v.date.day(), f64::from(v.door_to_doctor_mins))),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputIndicators {
    pub outcome_counts: Vec<RankedCount>,
    pub top_diagnoses: Vec<RankedCount>,
    pub top_departments: Vec<RankedCount>,
    /// Share of visits admitted or left without being seen
    pub casualty_rate_pct: f64,
}

impl OutputIndicators {
    #[must_use]
    pub fn compute(visits: &[Visit]) -> Self {
        let casualties = visits
            .iter()
            .filter(|v| matches!(v.outcome, Outcome::Admitted | Outcome::Lwbs))
            .count();

        Self {
            outcome_counts: ranked_counts(visits.iter().map(|v| v.outcome.as_str()), None),
            top_diagnoses: ranked_counts(
                visits.iter().map(|v| v.diagnosis.as_str()),
                Some(TOP_DIAGNOSES),
            ),
            top_departments: ranked_counts(
                visits.iter().map(|v| v.department.as_str()),
                Some(TOP_DEPARTMENTS),
            ),
            casualty_rate_pct: percentage(casualties, visits.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceIndicators {
    pub lwbs_rate_pct: f64,
    pub avg_los_hours_by_outcome: BTreeMap<String, f64>,
    pub insurance_mix: Vec<RankedCount>,
    pub avg_los_hours_by_day: BTreeMap<u32, f64>,
}

impl ResourceIndicators {
    #[must_use]
    pub fn compute(visits: &[Visit]) -> Self {
        let los_hours = |v: &Visit| f64::from(v.length_of_stay_mins) / MINUTES_PER_HOUR;

        Self {
            lwbs_rate_pct: percentage(visits.iter().filter(|v| v.lwbs).count(), visits.len()),
            avg_los_hours_by_outcome: grouped_means(
                visits.iter().map(|v| (v.outcome.as_str().to_string(), los_hours(v))),
            ),
            insurance_mix: ranked_counts(visits.iter().map(|v| v.insurance_type.as_str()), None),
            avg_los_hours_by_day: grouped_means(visits.iter().map(|v| (v.date.day(), los_hours(v)))),
        }
    }
}

/// All dashboard indicators for one selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicators {
    pub staffing: StaffingIndicators,
    pub processing: ProcessingIndicators,
    pub outputs: OutputIndicators,
    pub resources: ResourceIndicators,
}

impl Indicators {
    #[must_use]
    pub fn compute(visits: &[Visit], staff_hours: &[StaffHours]) -> Self {
        Self {
            staffing: StaffingIndicators::compute(staff_hours),
            processing: ProcessingIndicators::compute(visits),
            outputs: OutputIndicators::compute(visits),
            resources: ResourceIndicators::compute(visits),
        }
    }

    /// Compute indicators from filtered record batches
    pub fn from_batches(tables: &DatasetBatches) -> Result<Self> {
        let dataset = tables.to_dataset()?;
        Ok(Self::compute(&dataset.visits, &dataset.staff_hours))
    }
}
