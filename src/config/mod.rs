//! Configuration for the ED data generator.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{EdSynthError, Result};

/// Seed used when none is configured, so default runs are reproducible
pub const DEFAULT_SEED: u64 = 42;

/// What to do when the configured end date precedes the start date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InvertedRangePolicy {
    /// Fail before any record is drawn
    #[default]
    Reject,
    /// Produce empty tables without an error
    Empty,
}

/// Whether a drawn "None" referral destination is written as a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NoneReferralPolicy {
    /// Every discharged visit gets a referral row, "None" included
    #[default]
    Record,
    /// A "None" draw produces no row
    Skip,
}

/// File formats the tables can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Parquet,
    /// CSV and Parquet side by side
    Both,
}

impl OutputFormat {
    #[must_use]
    pub const fn writes_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }

    #[must_use]
    pub const fn writes_parquet(self) -> bool {
        matches!(self, Self::Parquet | Self::Both)
    }
}

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// First calendar day to generate visits for (inclusive)
    pub start_date: NaiveDate,
    /// Last calendar day to generate visits for (inclusive)
    pub end_date: NaiveDate,
    /// Seed for the random source; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Directory the tables are written to
    pub output_dir: PathBuf,
    pub output_format: OutputFormat,
    pub inverted_range: InvertedRangePolicy,
    pub none_referrals: NoneReferralPolicy,
    /// Write `summary.json` next to the tables
    pub write_summary_json: bool,
    /// Show a progress bar while generating visits
    pub show_progress: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
            seed: Some(DEFAULT_SEED),
            output_dir: PathBuf::from("data"),
            output_format: OutputFormat::Csv,
            inverted_range: InvertedRangePolicy::Reject,
            none_referrals: NoneReferralPolicy::Record,
            write_summary_json: false,
            show_progress: true,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a configuration
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Whether the date range is inverted (end before start)
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.end_date < self.start_date
    }

    /// Number of calendar days covered, zero for an inverted range
    #[must_use]
    pub fn day_count(&self) -> u64 {
        if self.is_inverted() {
            0
        } else {
            (self.end_date - self.start_date).num_days() as u64 + 1
        }
    }

    /// Check the configuration against the inverted-range policy
    pub fn validate(&self) -> Result<()> {
        if self.is_inverted() && self.inverted_range == InvertedRangePolicy::Reject {
            return Err(EdSynthError::config(format!(
                "End date {} is before start date {}",
                self.end_date, self.start_date
            )));
        }
        Ok(())
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generator Configuration:")?;
        writeln!(f, "  Date Range: {} to {}", self.start_date, self.end_date)?;
        match self.seed {
            Some(seed) => writeln!(f, "  Seed: {seed}")?,
            None => writeln!(f, "  Seed: <entropy>")?,
        }
        writeln!(f, "  Output Directory: {}", self.output_dir.display())?;
        writeln!(f, "  Output Format: {:?}", self.output_format)?;
        writeln!(f, "  Inverted Range: {:?}", self.inverted_range)?;
        writeln!(f, "  None Referrals: {:?}", self.none_referrals)?;
        Ok(())
    }
}

/// Builder for constructing a generator configuration
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Set the inclusive date range
    #[must_use]
    pub const fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.config.start_date = start;
        self.config.end_date = end;
        self
    }

    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Draw the seed from OS entropy
    #[must_use]
    pub const fn unseeded(mut self) -> Self {
        self.config.seed = None;
        self
    }

    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    #[must_use]
    pub const fn inverted_range(mut self, policy: InvertedRangePolicy) -> Self {
        self.config.inverted_range = policy;
        self
    }

    #[must_use]
    pub const fn none_referrals(mut self, policy: NoneReferralPolicy) -> Self {
        self.config.none_referrals = policy;
        self
    }

    #[must_use]
    pub const fn write_summary_json(mut self, enabled: bool) -> Self {
        self.config.write_summary_json = enabled;
        self
    }

    #[must_use]
    pub const fn show_progress(mut self, enabled: bool) -> Self {
        self.config.show_progress = enabled;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}
