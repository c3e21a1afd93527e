//! Referral model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Onward referral recorded for a discharged visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
    /// Id of the originating (discharged) visit
    pub visit_id: String,
    #[serde(with = "crate::models::dates")]
    pub date: NaiveDate,
    /// Destination department, or "None"
    pub referral_department: String,
}

impl Referral {
    /// Column names in file order
    pub const COLUMNS: [&'static str; 3] = ["visit_id", "date", "referral_department"];
}
