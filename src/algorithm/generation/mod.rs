//! Synthetic record generation
//!
//! Produces the visit, staff-hours and referral tables from an explicitly
//! passed random source.

pub mod generator;
pub mod pipeline;
pub mod referrals;
pub mod staff;
pub mod visits;

// Re-export commonly used items
pub use generator::EdDataGenerator;
pub use pipeline::{ClinicalCourse, derive_clinical_course};
pub use referrals::{generate_referrals, referral_destinations};
pub use staff::{generate_staff_hours, observed_weeks};
pub use visits::{VisitModel, generate_visits};
