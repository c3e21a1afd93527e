//! Staff-hours week-block filtering
//!
//! Staff hours are keyed by (year, ISO week) rather than by date, so a
//! month selection is approximated by a fixed block of four weeks.

use std::collections::HashSet;

use arrow::array::{Array, BooleanArray, Int32Array, UInt32Array};
use arrow::record_batch::RecordBatch;

use crate::calendar::week_block;
use crate::error::Result;
use crate::filter::core::{BatchFilter, typed_column};

/// Keeps rows with `year` equal and `start_week <= week < end_week`
#[derive(Debug, Clone)]
pub struct WeekBlockFilter {
    year: i32,
    start_week: u32,
    end_week: u32,
}

impl WeekBlockFilter {
    #[must_use]
    pub const fn new(year: i32, start_week: u32, end_week: u32) -> Self {
        Self {
            year,
            start_week,
            end_week,
        }
    }

    /// The four-week block approximating a calendar month
    #[must_use]
    pub const fn for_month(year: i32, month: u32) -> Self {
        let (start_week, end_week) = week_block(month);
        Self::new(year, start_week, end_week)
    }

    #[must_use]
    pub const fn weeks(&self) -> (u32, u32) {
        (self.start_week, self.end_week)
    }
}

impl BatchFilter for WeekBlockFilter {
    fn mask(&self, batch: &RecordBatch) -> Result<BooleanArray> {
        let years = typed_column::<Int32Array>(batch, "year")?;
        let weeks = typed_column::<UInt32Array>(batch, "week")?;

        Ok((0..batch.num_rows())
            .map(|i| {
                Some(
                    years.is_valid(i)
                        && weeks.is_valid(i)
                        && years.value(i) == self.year
                        && (self.start_week..self.end_week).contains(&weeks.value(i)),
                )
            })
            .collect())
    }

    fn required_columns(&self) -> HashSet<String> {
        HashSet::from(["year".to_string(), "week".to_string()])
    }
}
