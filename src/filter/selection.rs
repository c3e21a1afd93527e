//! Month and day-range selection across the three tables
//!
//! A [`Selection`] keeps visits of one month whose day of month lies in an
//! inclusive range, the referrals of those visits, and the staff hours of
//! the four-week block approximating the month.

use std::fmt;
use std::sync::Arc;

use arrow::array::Date32Array;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use log::debug;

use crate::calendar::{days_in_month, month_display_name, parse_year_month, year_month};
use crate::error::{EdSynthError, Result};
use crate::filter::core::{AndFilter, BatchFilter, typed_column};
use crate::filter::date::{DayOfMonthRangeFilter, YearMonthFilter};
use crate::filter::membership::VisitIdFilter;
use crate::filter::staff::WeekBlockFilter;
use crate::io::DatasetBatches;

/// Name of the date column of the visits table
pub const VISIT_DATE_COLUMN: &str = "date";

/// A dashboard selection: one month plus an inclusive day-of-month range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    year_month: String,
    year: i32,
    month: u32,
    day_range: (u32, u32),
}

impl Selection {
    /// Create a selection for month key `"YYYY-MM"` and days `first..=last`
    ///
    /// # Errors
    /// Malformed month keys, days outside `1..=31` and `first > last` are
    /// rejected.
    pub fn new(year_month: &str, first: u32, last: u32) -> Result<Self> {
        let (year, month) = parse_year_month(year_month)?;

        if !(1..=31).contains(&first) || !(1..=31).contains(&last) {
            return Err(EdSynthError::validation(format!(
                "Day range {first}..={last} must lie within 1..=31"
            )));
        }
        if first > last {
            return Err(EdSynthError::validation(format!(
                "Day range start {first} is after its end {last}"
            )));
        }

        Ok(Self {
            year_month: format!("{year:04}-{month:02}"),
            year,
            month,
            day_range: (first, last),
        })
    }

    /// Select every day of a month
    pub fn whole_month(year_month: &str) -> Result<Self> {
        let (year, month) = parse_year_month(year_month)?;
        Self::new(year_month, 1, days_in_month(year, month)?)
    }

    #[must_use]
    pub fn year_month(&self) -> &str {
        &self.year_month
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub const fn day_range(&self) -> (u32, u32) {
        self.day_range
    }

    /// Filter applied to the visits table
    #[must_use]
    pub fn visit_filter(&self) -> AndFilter {
        let (first, last) = self.day_range;
        let month: Arc<dyn BatchFilter + Send + Sync> =
            Arc::new(YearMonthFilter::new(VISIT_DATE_COLUMN, self.year, self.month));
        let days: Arc<dyn BatchFilter + Send + Sync> =
            Arc::new(DayOfMonthRangeFilter::new(VISIT_DATE_COLUMN, first, last));
        AndFilter::new(vec![month, days])
    }

    /// Filter applied to the staff-hours table
    #[must_use]
    pub const fn staff_filter(&self) -> WeekBlockFilter {
        WeekBlockFilter::for_month(self.year, self.month)
    }

    /// Apply the selection to all three tables
    ///
    /// A month absent from the data yields empty tables.
    pub fn apply(&self, tables: &DatasetBatches) -> Result<DatasetBatches> {
        let visits = self.visit_filter().filter(&tables.visits)?;
        let referrals = VisitIdFilter::from_visits(&visits)?.filter(&tables.referrals)?;
        let staff_hours = self.staff_filter().filter(&tables.staff_hours)?;

        debug!(
            "Selection {self}: {} visits, {} staff rows, {} referrals",
            visits.num_rows(),
            staff_hours.num_rows(),
            referrals.num_rows()
        );

        Ok(DatasetBatches {
            visits,
            staff_hours,
            referrals,
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = month_display_name(&self.year_month).map_err(|_| fmt::Error)?;
        write!(f, "{name}, days {}-{}", self.day_range.0, self.day_range.1)
    }
}

/// Sorted, unique "YYYY-MM" keys present in a visits batch
pub fn available_months(visits: &RecordBatch) -> Result<Vec<String>> {
    let dates = typed_column::<Date32Array>(visits, VISIT_DATE_COLUMN)?;
    Ok((0..dates.len())
        .filter_map(|i| dates.value_as_date(i))
        .map(year_month)
        .sorted()
        .dedup()
        .collect())
}
