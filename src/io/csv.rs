//! CSV persistence of record batches

use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use arrow::compute::concat_batches;
use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::datatypes::Schema;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::error::util::{safe_create_file, safe_open_file};
use crate::error::{EdSynthError, Result};

/// Rows per batch when reading CSV files back
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// How timestamps are rendered, e.g. `2024-01-01 08:15:00`
pub const CSV_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write a batch to `path` with a header row
pub fn write_csv(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = safe_create_file(path, "CSV table")?;
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .with_timestamp_format(CSV_TIMESTAMP_FORMAT.to_string())
        .build(BufWriter::new(file));

    writer.write(batch)?;
    writer
        .into_inner()
        .flush()
        .map_err(|e| EdSynthError::io("Failed to flush CSV table", path, e))?;

    debug!("Wrote {} rows to {}", batch.num_rows(), path.display());
    Ok(())
}

/// Read a whole CSV file with a header row into one batch of `schema`
pub fn read_csv(path: &Path, schema: &Schema) -> Result<RecordBatch> {
    let file = safe_open_file(path, "CSV table")?;
    let schema = Arc::new(schema.clone());

    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_header(true)
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build(BufReader::new(file))?;

    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    debug!("Read {} batches from {}", batches.len(), path.display());

    Ok(concat_batches(&schema, &batches)?)
}
