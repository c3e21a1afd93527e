//! Weekly staff hours model

use serde::{Deserialize, Serialize};

use crate::models::types::StaffRole;

/// Hours worked by one staff member in one (calendar year, ISO week)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffHours {
    pub staff_name: String,
    pub role: StaffRole,
    pub specialty: String,
    /// Calendar year of the visits that produced this week
    pub year: i32,
    /// ISO week number, 1..=53
    pub week: u32,
    pub hours_worked: u32,
}

impl StaffHours {
    /// Column names in file order
    pub const COLUMNS: [&'static str; 6] = [
        "staff_name",
        "role",
        "specialty",
        "year",
        "week",
        "hours_worked",
    ];
}
