use ed_synth::io::table_path;
use ed_synth::models::{Referral, StaffHours, Visit};
use ed_synth::{
    ArrowSchema, DatasetBatches, EdDataGenerator, EdDataset, OutputFormat, Result, TableFormat,
};

use crate::utils::{date, test_config};

fn write_sample(dir: &std::path::Path, format: OutputFormat) -> Result<EdDataset> {
    let mut config = test_config(date(2024, 1, 1), date(2024, 1, 10), 42, dir);
    config.output_format = format;
    let (dataset, _) = EdDataGenerator::new(config)?.generate_all_data()?;
    Ok(dataset)
}

fn assert_shape(batches: &DatasetBatches, dataset: &EdDataset) {
    assert_eq!(batches.visits.num_rows(), dataset.visits.len());
    assert_eq!(batches.staff_hours.num_rows(), dataset.staff_hours.len());
    assert_eq!(batches.referrals.num_rows(), dataset.referrals.len());

    let names = |batch: &arrow::record_batch::RecordBatch| -> Vec<String> {
        batch.schema().fields().iter().map(|f| f.name().clone()).collect()
    };
    assert_eq!(names(&batches.visits), Visit::COLUMNS);
    assert_eq!(names(&batches.staff_hours), StaffHours::COLUMNS);
    assert_eq!(names(&batches.referrals), Referral::COLUMNS);
}

#[test]
fn test_csv_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let dataset = write_sample(dir.path(), OutputFormat::Csv)?;

    let batches = DatasetBatches::load(dir.path(), TableFormat::Csv)?;
    assert_shape(&batches, &dataset);
    assert_eq!(batches.to_dataset()?, dataset);
    Ok(())
}

#[test]
fn test_parquet_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let dataset = write_sample(dir.path(), OutputFormat::Parquet)?;

    assert!(!table_path(dir.path(), "patient_visits", TableFormat::Csv).exists());
    let loaded = EdDataset::load(dir.path(), TableFormat::Parquet)?;
    assert_eq!(loaded, dataset);
    assert_eq!(loaded.visits[0].visit_id, "V000001");
    Ok(())
}

#[test]
fn test_both_formats_agree() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_sample(dir.path(), OutputFormat::Both)?;

    let from_csv = EdDataset::load(dir.path(), TableFormat::Csv)?;
    let from_parquet = EdDataset::load(dir.path(), TableFormat::Parquet)?;
    assert_eq!(from_csv, from_parquet);
    Ok(())
}

#[tokio::test]
async fn test_async_load_matches_sync() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_sample(dir.path(), OutputFormat::Csv)?;

    let sync = EdDataset::load(dir.path(), TableFormat::Csv)?;
    let concurrent = EdDataset::load_async(dir.path(), TableFormat::Csv).await?;
    assert_eq!(sync, concurrent);
    Ok(())
}

#[test]
fn test_schema_rejects_wrong_batch() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_sample(dir.path(), OutputFormat::Parquet)?;

    let batches = DatasetBatches::load(dir.path(), TableFormat::Parquet)?;
    assert!(Visit::from_record_batch(&batches.staff_hours).is_err());
    Ok(())
}
