//! Parquet persistence of record batches

use std::path::Path;

use arrow::compute::concat_batches;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use log::debug;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::error::Result;
use crate::error::util::{safe_create_file, safe_open_file};

/// Write a batch to a Snappy-compressed Parquet file
pub fn write_parquet(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = safe_create_file(path, "Parquet table")?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();

    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(batch)?;
    writer.close()?;

    debug!("Wrote {} rows to {}", batch.num_rows(), path.display());
    Ok(())
}

/// Read a whole Parquet file into one batch
pub fn read_parquet(path: &Path) -> Result<RecordBatch> {
    let file = safe_open_file(path, "Parquet table")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let reader = builder.build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    debug!("Read {} batches from {}", batches.len(), path.display());

    Ok(concat_batches(&schema, &batches)?)
}
