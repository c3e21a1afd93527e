//! Derived clinical fields of a visit
//!
//! Each step is a function of the fields derived before it:
//! base severity → perturbed severity → wait → length of stay → LWBS →
//! outcome → satisfaction. Service flags are independent of all of them.

use rand::Rng;

use crate::algorithm::sampling::{SeverityTiming, chance};
use crate::models::{EsiLevel, Outcome, ServiceFlags};

/// Probability that a patient leaves before being seen
pub const LWBS_PROBABILITY: f64 = 0.045;
pub const NEEDS_LABS_PROBABILITY: f64 = 0.597;
pub const NEEDS_IMAGING_PROBABILITY: f64 = 0.378;
pub const NEEDS_CONSULT_PROBABILITY: f64 = 0.284;
pub const ADMIN_FLAG_PROBABILITY: f64 = 0.497;

/// Everything derived from a diagnosis's base severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClinicalCourse {
    pub esi_level: EsiLevel,
    pub door_to_doctor_mins: u32,
    pub length_of_stay_mins: u32,
    pub lwbs: bool,
    pub outcome: Outcome,
    pub satisfaction_score: u8,
    pub flags: ServiceFlags,
}

/// Shift the base severity by -1, 0 or +1 and clamp to 1..=5
pub fn perturb_severity<R: Rng + ?Sized>(base: EsiLevel, rng: &mut R) -> EsiLevel {
    let shift: i32 = rng.random_range(-1..=1);
    EsiLevel::clamped(i32::from(base.value()) + shift)
}

/// Minutes from arrival to first physician contact
pub fn door_to_doctor_minutes<R: Rng + ?Sized>(
    esi: EsiLevel,
    model: &SeverityTiming,
    rng: &mut R,
) -> u32 {
    model.draw(esi, rng)
}

/// Minutes from arrival to departure or admission
pub fn length_of_stay_minutes<R: Rng + ?Sized>(
    esi: EsiLevel,
    model: &SeverityTiming,
    rng: &mut R,
) -> u32 {
    model.draw(esi, rng)
}

pub fn left_without_being_seen<R: Rng + ?Sized>(rng: &mut R) -> bool {
    chance(LWBS_PROBABILITY, rng)
}

/// Chance that a seen patient is admitted rather than discharged
#[must_use]
pub fn admission_probability(esi: EsiLevel) -> f64 {
    match esi.value() {
        1 | 2 => 0.7,
        3 => 0.4,
        _ => 0.15,
    }
}

/// LWBS when the flag is set, otherwise admitted or discharged by severity
pub fn decide_outcome<R: Rng + ?Sized>(esi: EsiLevel, lwbs: bool, rng: &mut R) -> Outcome {
    if lwbs {
        Outcome::Lwbs
    } else if chance(admission_probability(esi), rng) {
        Outcome::Admitted
    } else {
        Outcome::Discharged
    }
}

/// Inclusive satisfaction range for an outcome
#[must_use]
pub const fn satisfaction_range(outcome: Outcome) -> (u8, u8) {
    match outcome {
        Outcome::Lwbs => (1, 3),
        Outcome::Discharged => (3, 10),
        Outcome::Admitted => (4, 9),
    }
}

pub fn satisfaction_score<R: Rng + ?Sized>(outcome: Outcome, rng: &mut R) -> u8 {
    let (low, high) = satisfaction_range(outcome);
    rng.random_range(low..=high)
}

pub fn service_flags<R: Rng + ?Sized>(rng: &mut R) -> ServiceFlags {
    ServiceFlags {
        needs_labs: chance(NEEDS_LABS_PROBABILITY, rng),
        needs_imaging: chance(NEEDS_IMAGING_PROBABILITY, rng),
        needs_consult: chance(NEEDS_CONSULT_PROBABILITY, rng),
        admin_flagged: chance(ADMIN_FLAG_PROBABILITY, rng),
    }
}

/// Run the whole chain for one visit
pub fn derive_clinical_course<R: Rng + ?Sized>(
    base_severity: EsiLevel,
    wait: &SeverityTiming,
    stay: &SeverityTiming,
    rng: &mut R,
) -> ClinicalCourse {
    let esi_level = perturb_severity(base_severity, rng);
    let door_to_doctor_mins = door_to_doctor_minutes(esi_level, wait, rng);
    let length_of_stay_mins = length_of_stay_minutes(esi_level, stay, rng);
    let lwbs = left_without_being_seen(rng);
    let outcome = decide_outcome(esi_level, lwbs, rng);
    let satisfaction_score = satisfaction_score(outcome, rng);
    let flags = service_flags(rng);

    ClinicalCourse {
        esi_level,
        door_to_doctor_mins,
        length_of_stay_mins,
        lwbs,
        outcome,
        satisfaction_score,
        flags,
    }
}
