//! The three generated tables as one unit
//!
//! [`EdDataset`] holds typed rows; [`DatasetBatches`] holds the same tables as
//! Arrow record batches, which is what the dashboard filters operate on.

use std::path::{Path, PathBuf};

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use log::info;

use crate::config::OutputFormat;
use crate::error::util::ensure_output_dir;
use crate::error::Result;
use crate::io::csv::{read_csv, write_csv};
use crate::io::parquet::{read_parquet, write_parquet};
use crate::models::{Referral, StaffHours, Visit};
use crate::schema::ArrowSchema;

pub const VISITS_TABLE: &str = "patient_visits";
pub const STAFF_HOURS_TABLE: &str = "staff_hours";
pub const REFERRALS_TABLE: &str = "referrals";

/// On-disk file format of a single table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        }
    }

    /// Formats written for an output setting
    #[must_use]
    pub fn written_by(format: OutputFormat) -> Vec<Self> {
        let mut formats = Vec::with_capacity(2);
        if format.writes_csv() {
            formats.push(Self::Csv);
        }
        if format.writes_parquet() {
            formats.push(Self::Parquet);
        }
        formats
    }
}

/// Path of a table file inside an output directory
#[must_use]
pub fn table_path(dir: &Path, table: &str, format: TableFormat) -> PathBuf {
    dir.join(format!("{table}.{}", format.extension()))
}

fn write_table(path: &Path, batch: &RecordBatch, format: TableFormat) -> Result<()> {
    match format {
        TableFormat::Csv => write_csv(path, batch),
        TableFormat::Parquet => write_parquet(path, batch),
    }
}

fn read_table(path: &Path, schema: &Schema, format: TableFormat) -> Result<RecordBatch> {
    match format {
        TableFormat::Csv => read_csv(path, schema),
        TableFormat::Parquet => read_parquet(path),
    }
}

async fn read_table_async(path: PathBuf, schema: Schema, format: TableFormat) -> Result<RecordBatch> {
    tokio::task::spawn_blocking(move || read_table(&path, &schema, format))
        .await
        .map_err(|e| anyhow::anyhow!("Table loading task failed: {e}"))?
}

/// Visits, staff hours and referrals from one generation run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdDataset {
    pub visits: Vec<Visit>,
    pub staff_hours: Vec<StaffHours>,
    pub referrals: Vec<Referral>,
}

impl EdDataset {
    /// Number of visits with outcome Discharged
    #[must_use]
    pub fn discharged_count(&self) -> usize {
        self.visits.iter().filter(|v| v.is_discharged()).count()
    }

    /// Convert all tables to record batches
    pub fn to_batches(&self) -> Result<DatasetBatches> {
        Ok(DatasetBatches {
            visits: Visit::to_record_batch(&self.visits)?,
            staff_hours: StaffHours::to_record_batch(&self.staff_hours)?,
            referrals: Referral::to_record_batch(&self.referrals)?,
        })
    }

    /// Write all tables to `dir` in the requested format(s)
    pub fn write(&self, dir: &Path, format: OutputFormat) -> Result<()> {
        self.to_batches()?.write(dir, format)
    }

    /// Load all tables from `dir`
    pub fn load(dir: &Path, format: TableFormat) -> Result<Self> {
        DatasetBatches::load(dir, format)?.to_dataset()
    }

    /// Load all tables from `dir`, reading the three files concurrently
    pub async fn load_async(dir: &Path, format: TableFormat) -> Result<Self> {
        DatasetBatches::load_async(dir, format).await?.to_dataset()
    }
}

/// The three tables as Arrow record batches
#[derive(Debug, Clone)]
pub struct DatasetBatches {
    pub visits: RecordBatch,
    pub staff_hours: RecordBatch,
    pub referrals: RecordBatch,
}

impl DatasetBatches {
    /// Write every table in every format the output setting asks for
    pub fn write(&self, dir: &Path, format: OutputFormat) -> Result<()> {
        ensure_output_dir(dir)?;

        for table_format in TableFormat::written_by(format) {
            for (table, batch) in self.tables() {
                let path = table_path(dir, table, table_format);
                write_table(&path, batch, table_format)?;
                info!("Wrote {} rows to {}", batch.num_rows(), path.display());
            }
        }
        Ok(())
    }

    /// Load the tables from `dir`
    pub fn load(dir: &Path, format: TableFormat) -> Result<Self> {
        Ok(Self {
            visits: read_table(&table_path(dir, VISITS_TABLE, format), &Visit::schema(), format)?,
            staff_hours: read_table(
                &table_path(dir, STAFF_HOURS_TABLE, format),
                &StaffHours::schema(),
                format,
            )?,
            referrals: read_table(
                &table_path(dir, REFERRALS_TABLE, format),
                &Referral::schema(),
                format,
            )?,
        })
    }

    /// Load the tables from `dir` on the blocking pool, concurrently
    pub async fn load_async(dir: &Path, format: TableFormat) -> Result<Self> {
        let (visits, staff_hours, referrals) = futures::try_join!(
            read_table_async(table_path(dir, VISITS_TABLE, format), Visit::schema(), format),
            read_table_async(
                table_path(dir, STAFF_HOURS_TABLE, format),
                StaffHours::schema(),
                format
            ),
            read_table_async(
                table_path(dir, REFERRALS_TABLE, format),
                Referral::schema(),
                format
            )
        )?;

        Ok(Self {
            visits,
            staff_hours,
            referrals,
        })
    }

    /// `(table name, batch)` pairs in write order
    #[must_use]
    pub fn tables(&self) -> [(&'static str, &RecordBatch); 3] {
        [
            (VISITS_TABLE, &self.visits),
            (STAFF_HOURS_TABLE, &self.staff_hours),
            (REFERRALS_TABLE, &self.referrals),
        ]
    }

    /// Convert back to typed rows
    pub fn to_dataset(&self) -> Result<EdDataset> {
        Ok(EdDataset {
            visits: Visit::from_record_batch(&self.visits)?,
            staff_hours: StaffHours::from_record_batch(&self.staff_hours)?,
            referrals: Referral::from_record_batch(&self.referrals)?,
        })
    }
}
