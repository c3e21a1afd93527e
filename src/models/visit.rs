//! Patient visit model
//!
//! One record per ED encounter. Field order is the column order of
//! `patient_visits.csv`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::types::{EsiLevel, Gender, InsuranceType, Outcome, Race};

/// Width of the zero-padded numeric part of a visit id
const VISIT_ID_WIDTH: usize = 6;

/// Format a sequential visit number as `V000001`
#[must_use]
pub fn format_visit_id(sequence: u64) -> String {
    format!("V{sequence:0width$}", width = VISIT_ID_WIDTH)
}

/// Parse the numeric part back out of a visit id
#[must_use]
pub fn parse_visit_id(id: &str) -> Option<u64> {
    id.strip_prefix('V')?.parse().ok()
}

/// Independent service flags drawn for every visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceFlags {
    pub needs_labs: bool,
    pub needs_imaging: bool,
    pub needs_consult: bool,
    pub admin_flagged: bool,
}

/// A single Emergency Department visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// Sequential identifier, `V000001` onwards
    pub visit_id: String,
    /// Arrival date
    #[serde(with = "crate::models::dates")]
    pub date: NaiveDate,
    /// Arrival date and time (minute resolution)
    #[serde(with = "chrono::naive::serde::ts_milliseconds")]
    pub arrival_time: NaiveDateTime,
    pub patient_name: String,
    pub age: u8,
    pub gender: Gender,
    pub race: Race,
    pub diagnosis: String,
    pub department: String,
    pub esi_level: EsiLevel,
    pub door_to_doctor_mins: u32,
    pub length_of_stay_mins: u32,
    pub satisfaction_score: u8,
    pub outcome: Outcome,
    pub insurance_type: InsuranceType,
    pub needs_labs: bool,
    pub needs_imaging: bool,
    pub needs_consult: bool,
    pub admin_flagged: bool,
    /// Left without being seen; always agrees with `outcome`
    pub lwbs: bool,
}

impl Visit {
    /// Column names in file order
    pub const COLUMNS: [&'static str; 20] = [
        "visit_id",
        "date",
        "arrival_time",
        "patient_name",
        "age",
        "gender",
        "race",
        "diagnosis",
        "department",
        "esi_level",
        "door_to_doctor_mins",
        "length_of_stay_mins",
        "satisfaction_score",
        "outcome",
        "insurance_type",
        "needs_labs",
        "needs_imaging",
        "needs_consult",
        "admin_flagged",
        "lwbs",
    ];

    #[must_use]
    pub fn is_discharged(&self) -> bool {
        self.outcome == Outcome::Discharged
    }

    #[must_use]
    pub fn is_admitted(&self) -> bool {
        self.outcome == Outcome::Admitted
    }

    /// Check the cross-field invariants every generated visit satisfies
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        (self.lwbs == (self.outcome == Outcome::Lwbs))
            && self.door_to_doctor_mins >= 1
            && self.length_of_stay_mins >= 30
            && (1..=10).contains(&self.satisfaction_score)
            && self.arrival_time.date() == self.date
    }
}
