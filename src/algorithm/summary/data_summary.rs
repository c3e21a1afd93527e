//! Post-generation data summary

use std::fmt;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use itertools::{Itertools, MinMaxResult};
use log::info;
use serde::{Deserialize, Serialize};

use crate::algorithm::summary::{mean, percentage};
use crate::error::util::safe_create_file;
use crate::error::{EdSynthError, Result};
use crate::io::EdDataset;

/// Headline figures of one generated dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub total_visits: usize,
    pub staff_records: usize,
    pub referral_count: usize,
    pub admission_rate_pct: f64,
    pub lwbs_rate_pct: f64,
    pub avg_door_to_doctor_mins: f64,
    pub avg_length_of_stay_mins: f64,
    pub avg_satisfaction: f64,
}

impl DataSummary {
    /// File name used when the summary is written next to the tables
    pub const FILE_NAME: &'static str = "summary.json";

    /// Summarize a dataset; rates and means over no visits are 0
    #[must_use]
    pub fn from_dataset(dataset: &EdDataset) -> Self {
        let visits = &dataset.visits;

        let (first_date, last_date) = match visits.iter().map(|v| v.date).minmax() {
            MinMaxResult::NoElements => (None, None),
            MinMaxResult::OneElement(date) => (Some(date), Some(date)),
            MinMaxResult::MinMax(first, last) => (Some(first), Some(last)),
        };

        let admitted = visits.iter().filter(|v| v.is_admitted()).count();
        let lwbs = visits.iter().filter(|v| v.lwbs).count();

        Self {
            first_date,
            last_date,
            total_visits: visits.len(),
            staff_records: dataset.staff_hours.len(),
            referral_count: dataset.referrals.len(),
            admission_rate_pct: percentage(admitted, visits.len()),
            lwbs_rate_pct: percentage(lwbs, visits.len()),
            avg_door_to_doctor_mins: mean(visits.iter().map(|v| f64::from(v.door_to_doctor_mins))),
            avg_length_of_stay_mins: mean(visits.iter().map(|v| f64::from(v.length_of_stay_mins))),
            avg_satisfaction: mean(visits.iter().map(|v| f64::from(v.satisfaction_score))),
        }
    }

    /// Write the summary as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = safe_create_file(path, "summary")?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer
            .flush()
            .map_err(|e| EdSynthError::io("Failed to flush summary", path, e))?;

        info!("Wrote summary to {}", path.display());
        Ok(())
    }
}

impl fmt::Display for DataSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data Summary:")?;
        match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => writeln!(f, "  Date range: {first} to {last}")?,
            _ => writeln!(f, "  Date range: (no visits)")?,
        }
        writeln!(f, "  Total visits: {}", self.total_visits)?;
        writeln!(f, "  Staff hour records: {}", self.staff_records)?;
        writeln!(f, "  Referrals: {}", self.referral_count)?;
        writeln!(f, "  Admission rate: {:.1}%", self.admission_rate_pct)?;
        writeln!(f, "  LWBS rate: {:.1}%", self.lwbs_rate_pct)?;
        writeln!(
            f,
            "  Avg door-to-doctor: {:.1} mins",
            self.avg_door_to_doctor_mins
        )?;
        writeln!(
            f,
            "  Avg length of stay: {:.1} mins",
            self.avg_length_of_stay_mins
        )?;
        write!(f, "  Avg satisfaction: {:.1}/10", self.avg_satisfaction)
    }
}
