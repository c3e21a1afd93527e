use std::path::Path;

use chrono::NaiveDate;
use ed_synth::{EdDataGenerator, EdDataset, GeneratorConfig, OutputFormat, Result};

/// Shorthand for a calendar date in tests
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Quiet configuration for a seeded run over `start..=end`
#[must_use]
pub fn test_config(start: NaiveDate, end: NaiveDate, seed: u64, output_dir: &Path) -> GeneratorConfig {
    GeneratorConfig::builder()
        .date_range(start, end)
        .seed(seed)
        .output_dir(output_dir)
        .output_format(OutputFormat::Csv)
        .show_progress(false)
        .build()
}

/// Generate a dataset in memory without writing it
pub fn generate(start: NaiveDate, end: NaiveDate, seed: u64) -> Result<EdDataset> {
    let config = test_config(start, end, seed, Path::new("unused"));
    Ok(EdDataGenerator::new(config)?.generate_all())
}

/// The first week of 2024, Monday to Sunday, all in ISO week 1
pub fn first_week_2024(seed: u64) -> Result<EdDataset> {
    generate(date(2024, 1, 1), date(2024, 1, 7), seed)
}
