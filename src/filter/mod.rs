//! Dashboard filtering over Arrow record batches
//!
//! Filters compute boolean keep-masks and share one mask application
//! routine. [`Selection`] combines them into the month and day-range view
//! the dashboard presents.

pub mod core;
pub mod date;
pub mod membership;
pub mod selection;
pub mod staff;

pub use self::core::{AndFilter, BatchFilter, filter_record_batch, typed_column};
pub use date::{DayOfMonthRangeFilter, YearMonthFilter};
pub use membership::{VISIT_ID_COLUMN, VisitIdFilter};
pub use selection::{Selection, VISIT_DATE_COLUMN, available_months};
pub use staff::WeekBlockFilter;
