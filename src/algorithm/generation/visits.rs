//! Patient visit generation
//!
//! Walks the calendar day by day, draws a Poisson day volume and emits one
//! visit per arrival with sequential ids.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use indicatif::ProgressBar;
use log::debug;
use rand::Rng;

use crate::algorithm::generation::pipeline::derive_clinical_course;
use crate::algorithm::sampling::{
    DailyVolume, SeverityTiming, WEEKDAY_MEAN_VISITS, WEEKEND_MEAN_VISITS, WeightedTable, pick,
};
use crate::calendar::{days_inclusive, is_weekend};
use crate::catalog::{
    AGE_BRACKETS, ARRIVAL_HOUR_WEIGHTS, DIAGNOSES, FIRST_NAMES, INSURANCE_WEIGHTS, LAST_NAMES,
    RACE_WEIGHTS,
};
use crate::error::Result;
use crate::models::{Gender, InsuranceType, Race, Visit, format_visit_id};

/// Every distribution a visit is drawn from, validated once
#[derive(Debug, Clone)]
pub struct VisitModel {
    daily_volume: DailyVolume,
    arrival_hours: WeightedTable<u32>,
    age_brackets: WeightedTable<(u8, u8)>,
    races: WeightedTable<Race>,
    insurance: WeightedTable<InsuranceType>,
    wait: SeverityTiming,
    stay: SeverityTiming,
}

impl VisitModel {
    /// Build the model from the fixed catalog constants
    pub fn new() -> Result<Self> {
        Ok(Self {
            daily_volume: DailyVolume::new(WEEKDAY_MEAN_VISITS, WEEKEND_MEAN_VISITS)?,
            arrival_hours: WeightedTable::new(
                ARRIVAL_HOUR_WEIGHTS
                    .iter()
                    .enumerate()
                    .map(|(hour, weight)| (hour as u32, *weight)),
            )?,
            age_brackets: WeightedTable::new(AGE_BRACKETS)?,
            races: WeightedTable::new(RACE_WEIGHTS)?,
            insurance: WeightedTable::new(INSURANCE_WEIGHTS)?,
            wait: SeverityTiming::door_to_doctor()?,
            stay: SeverityTiming::length_of_stay()?,
        })
    }

    /// Draw the number of arrivals on a given day
    pub fn daily_volume<R: Rng + ?Sized>(&self, day: NaiveDate, rng: &mut R) -> u32 {
        self.daily_volume.draw(is_weekend(day), rng)
    }

    /// Draw an arrival timestamp on the given day
    pub fn arrival_time<R: Rng + ?Sized>(&self, day: NaiveDate, rng: &mut R) -> NaiveDateTime {
        let hour = self.arrival_hours.draw(rng);
        let minute: u32 = rng.random_range(0..=59);
        day.and_time(NaiveTime::MIN) + TimeDelta::minutes(i64::from(hour * 60 + minute))
    }

    /// Draw an age: weighted bracket, then uniform within it
    pub fn age<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let (low, high) = self.age_brackets.draw(rng);
        rng.random_range(low..=high)
    }

    /// Draw one complete visit
    pub fn draw_visit<R: Rng + ?Sized>(
        &self,
        visit_id: String,
        day: NaiveDate,
        rng: &mut R,
    ) -> Visit {
        let arrival_time = self.arrival_time(day, rng);
        let age = self.age(rng);
        let gender = *pick(Gender::ALL, rng);

        let diagnosis = pick(&DIAGNOSES, rng);
        let course = derive_clinical_course(diagnosis.base_severity(), &self.wait, &self.stay, rng);

        let patient_name = format!("{} {}", pick(&FIRST_NAMES, rng), pick(&LAST_NAMES, rng));
        let race = self.races.draw(rng);
        let insurance_type = self.insurance.draw(rng);

        Visit {
            visit_id,
            date: day,
            arrival_time,
            patient_name,
            age,
            gender,
            race,
            diagnosis: diagnosis.name.to_string(),
            department: diagnosis.department.to_string(),
            esi_level: course.esi_level,
            door_to_doctor_mins: course.door_to_doctor_mins,
            length_of_stay_mins: course.length_of_stay_mins,
            satisfaction_score: course.satisfaction_score,
            outcome: course.outcome,
            insurance_type,
            needs_labs: course.flags.needs_labs,
            needs_imaging: course.flags.needs_imaging,
            needs_consult: course.flags.needs_consult,
            admin_flagged: course.flags.admin_flagged,
            lwbs: course.lwbs,
        }
    }
}

/// Generate visits for every day from `start` to `end` inclusive
///
/// Ids run from `V000001` without gaps, in day-then-arrival-draw order. An
/// inverted range yields no visits.
pub fn generate_visits<R: Rng + ?Sized>(
    start: NaiveDate,
    end: NaiveDate,
    model: &VisitModel,
    rng: &mut R,
    progress: &ProgressBar,
) -> Vec<Visit> {
    let mut visits = Vec::new();
    let mut sequence: u64 = 1;

    for day in days_inclusive(start, end) {
        let count = model.daily_volume(day, rng);
        for _ in 0..count {
            visits.push(model.draw_visit(format_visit_id(sequence), day, rng));
            sequence += 1;
        }
        progress.inc(1);
    }

    debug!("Generated {} visits between {start} and {end}", visits.len());
    visits
}
