//! Flat-file persistence of the generated tables
//!
//! Tables are written as CSV with a header row and/or as Parquet, one file
//! per table, and can be loaded back as record batches or typed rows.

pub mod csv;
pub mod dataset;
pub mod parquet;

pub use dataset::{
    DatasetBatches, EdDataset, REFERRALS_TABLE, STAFF_HOURS_TABLE, TableFormat, VISITS_TABLE,
    table_path,
};
