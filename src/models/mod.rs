//! Domain models for the generated ED tables
//!
//! One struct per table (visits, staff hours, referrals) plus the
//! categorical types their columns use.

pub mod dates;
pub mod referral;
pub mod staff;
pub mod types;
pub mod visit;

// Re-export commonly used types
pub use referral::Referral;
pub use staff::StaffHours;
pub use types::{EsiLevel, Gender, InsuranceType, Outcome, Race, StaffRole};
pub use visit::{ServiceFlags, Visit, format_visit_id, parse_visit_id};
