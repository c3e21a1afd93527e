//! Descriptive statistics over generated data
//!
//! [`DataSummary`] is reported after a generation run; [`Indicators`] are
//! the figures the dashboard shows for a selection.

pub mod data_summary;
pub mod indicators;

pub use data_summary::DataSummary;
pub use indicators::{
    Indicators, OutputIndicators, ProcessingIndicators, RankedCount, ResourceIndicators,
    StaffingIndicators, ranked_counts,
};

/// Arithmetic mean, 0 for no values
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// `part` as a percentage of `total`, 0 when `total` is 0
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}
