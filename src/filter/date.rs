//! Date filtering over `Date32` columns
//!
//! Month and day-of-month selection used by the dashboard.

use std::collections::HashSet;

use arrow::array::{Array, BooleanArray, Date32Array};
use arrow::record_batch::RecordBatch;
use chrono::{Datelike, NaiveDate};

use crate::error::Result;
use crate::filter::core::{BatchFilter, typed_column};

/// Build a mask by evaluating a predicate on every date of a column
///
/// Null dates never match.
fn date_mask<F>(batch: &RecordBatch, column: &str, predicate: F) -> Result<BooleanArray>
where
    F: Fn(NaiveDate) -> bool,
{
    let dates = typed_column::<Date32Array>(batch, column)?;
    Ok((0..dates.len())
        .map(|i| Some(dates.is_valid(i) && dates.value_as_date(i).is_some_and(&predicate)))
        .collect())
}

/// Keeps rows whose date falls in one calendar month
#[derive(Debug, Clone)]
pub struct YearMonthFilter {
    date_column: String,
    year: i32,
    month: u32,
}

impl YearMonthFilter {
    #[must_use]
    pub fn new(date_column: impl Into<String>, year: i32, month: u32) -> Self {
        Self {
            date_column: date_column.into(),
            year,
            month,
        }
    }
}

impl BatchFilter for YearMonthFilter {
    fn mask(&self, batch: &RecordBatch) -> Result<BooleanArray> {
        date_mask(batch, &self.date_column, |date| {
            date.year() == self.year && date.month() == self.month
        })
    }

    fn required_columns(&self) -> HashSet<String> {
        HashSet::from([self.date_column.clone()])
    }
}

/// Keeps rows whose day of month is within `first..=last`
#[derive(Debug, Clone)]
pub struct DayOfMonthRangeFilter {
    date_column: String,
    first: u32,
    last: u32,
}

impl DayOfMonthRangeFilter {
    #[must_use]
    pub fn new(date_column: impl Into<String>, first: u32, last: u32) -> Self {
        Self {
            date_column: date_column.into(),
            first,
            last,
        }
    }
}

impl BatchFilter for DayOfMonthRangeFilter {
    fn mask(&self, batch: &RecordBatch) -> Result<BooleanArray> {
        date_mask(batch, &self.date_column, |date| {
            (self.first..=self.last).contains(&date.day())
        })
    }

    fn required_columns(&self) -> HashSet<String> {
        HashSet::from([self.date_column.clone()])
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::datatypes::{DataType, Field, Schema};

    use super::*;
    use crate::models::dates::to_epoch_days;

    fn batch_of(dates: &[(i32, u32, u32)]) -> RecordBatch {
        let days: Vec<i32> = dates
            .iter()
            .map(|&(y, m, d)| to_epoch_days(NaiveDate::from_ymd_opt(y, m, d).unwrap()))
            .collect();
        let schema = Schema::new(vec![Field::new("date", DataType::Date32, false)]);
        RecordBatch::try_new(Arc::new(schema), vec![Arc::new(Date32Array::from(days))]).unwrap()
    }

    #[test]
    fn test_year_month_filter() {
        let batch = batch_of(&[(2024, 1, 1), (2024, 2, 1), (2023, 1, 15), (2024, 1, 31)]);
        let filtered = YearMonthFilter::new("date", 2024, 1).filter(&batch).unwrap();
        assert_eq!(filtered.num_rows(), 2);
    }

    #[test]
    fn test_day_range_is_inclusive() {
        let batch = batch_of(&[(2024, 1, 4), (2024, 1, 5), (2024, 1, 10), (2024, 1, 11)]);
        let filtered = DayOfMonthRangeFilter::new("date", 5, 10)
            .filter(&batch)
            .unwrap();
        assert_eq!(filtered.num_rows(), 2);
    }

    #[test]
    fn test_missing_column() {
        let batch = batch_of(&[(2024, 1, 1)]);
        assert!(YearMonthFilter::new("arrival", 2024, 1).filter(&batch).is_err());
    }
}
