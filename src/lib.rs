//! Synthetic Emergency Department data generation
//!
//! Generates three linked tables (patient visits, weekly staff hours and
//! discharge referrals) from a seeded random source, writes them as CSV
//! and/or Parquet, and provides the month and day-range selection and the
//! indicators a dashboard reads from them.

pub mod algorithm;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod io;
pub mod models;
pub mod schema;

// Re-export the most common types for easier use
// Core types
pub use config::{
    DEFAULT_SEED, GeneratorConfig, GeneratorConfigBuilder, InvertedRangePolicy,
    NoneReferralPolicy, OutputFormat,
};
pub use error::{EdSynthError, Result};
pub use models::{Referral, StaffHours, Visit};

// Generation and summaries
pub use algorithm::generation::EdDataGenerator;
pub use algorithm::summary::{DataSummary, Indicators};

// Persistence
pub use io::{DatasetBatches, EdDataset, TableFormat};
pub use schema::ArrowSchema;

// Dashboard selection
pub use calendar::{days_in_month, month_display_name, year_month};
pub use filter::{BatchFilter, Selection, available_months};

// Arrow types
pub use arrow::record_batch::RecordBatch;
