//! Fixed reference data for the generator
//!
//! Diagnoses, the staff roster, referral destinations, name pools and the
//! categorical weights every table is drawn from.

pub mod diagnoses;
pub mod roster;

pub use diagnoses::{DIAGNOSES, DiagnosisEntry, find_diagnosis};
pub use roster::{ROSTER_ROLE, SPECIALTY_ROSTERS, SpecialtyRoster, roster_members, roster_size};

use crate::models::{InsuranceType, Race};

pub const FIRST_NAMES: [&str; 25] = [
    "Emma", "Lucas", "Sophie", "Thomas", "Marie", "Noah", "Julie", "Arthur", "Camille", "Louis",
    "Chloé", "Victor", "Nina", "Alexander", "Sophia", "Mohammed", "Priya", "Yuki", "Zainab", "Li",
    "Ahmed", "Olga", "Carlos", "Kevin", "Daniel",
];

pub const LAST_NAMES: [&str; 23] = [
    "Janssen", "Peeters", "Maes", "Jacobs", "Willems", "Dubois", "Lambert", "Martin", "Simon",
    "Santos", "Bailey", "Rivera", "Kim", "Hassan", "Sharma", "Tanaka", "Omar", "Wei", "Farah",
    "Petrov", "Garcia", "Murphy", "Cohen",
];

/// Age brackets (inclusive bounds) and their weights
pub const AGE_BRACKETS: [((u8, u8), f64); 4] = [
    ((0, 17), 49.0),
    ((18, 44), 45.0),
    ((45, 64), 43.0),
    ((65, 95), 64.0),
];

pub const RACE_WEIGHTS: [(Race, f64); 7] = [
    (Race::White, 27.0),
    (Race::AfricanAmerican, 20.0),
    (Race::TwoOrMoreRaces, 18.0),
    (Race::DeclinedToIdentify, 12.0),
    (Race::Asian, 12.0),
    (Race::PacificIslander, 6.0),
    (Race::NativeAmerican, 5.0),
];

pub const INSURANCE_WEIGHTS: [(InsuranceType, f64); 3] = [
    (InsuranceType::Private, 38.2),
    (InsuranceType::Public, 51.6),
    (InsuranceType::Uninsured, 10.1),
];

/// Label of the "no onward referral" destination
pub const NO_REFERRAL: &str = "None";

pub const REFERRAL_DESTINATIONS: [(&str, f64); 10] = [
    (NO_REFERRAL, 59.0),
    ("General Practice", 20.0),
    ("Orthopedics", 10.0),
    ("Physiotherapy", 3.0),
    ("Cardiology", 3.0),
    ("Neurology", 2.0),
    ("Gastroenterology", 2.0),
    ("Renal", 1.0),
    ("Psychiatry", 0.5),
    ("Infectious Disease", 0.5),
];

/// Relative arrival weight of each hour of the day, 00:00 to 23:00
pub const ARRIVAL_HOUR_WEIGHTS: [f64; 24] = [
    0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3, // 00-06
    0.8, 0.8, 0.8, 0.8, 0.8, // 07-11
    1.2, 1.2, 1.2, 1.2, 1.2, // 12-16
    1.5, 1.5, 1.5, 1.5, 1.5, // 17-21
    0.8, 0.8, // 22-23
];

/// Base hours a rostered staff member can be assigned in a week
pub const BASE_WEEKLY_HOURS: [u32; 6] = [6, 12, 18, 24, 30, 36];
