use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::Parser;
use log::info;

use ed_synth::{
    EdDataGenerator, GeneratorConfig, InvertedRangePolicy, NoneReferralPolicy, OutputFormat,
    Result,
};

/// Generate synthetic Emergency Department visit, staffing and referral data
#[derive(Debug, Parser)]
#[command(name = "ed-synth", version, about)]
struct Cli {
    /// First day to generate visits for (YYYY-MM-DD)
    #[arg(long, default_value = "2020-01-01")]
    start: NaiveDate,

    /// Last day to generate visits for, inclusive (YYYY-MM-DD)
    #[arg(long, default_value = "2025-12-31")]
    end: NaiveDate,

    /// Seed for the random source
    #[arg(long, default_value_t = ed_synth::DEFAULT_SEED)]
    seed: u64,

    /// Seed from OS entropy instead; output differs between runs
    #[arg(long, conflicts_with = "seed")]
    unseeded: bool,

    /// Directory the tables are written to
    #[arg(long, default_value = "data")]
    output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Behaviour when --end precedes --start
    #[arg(long, value_enum, default_value_t = InvertedRangePolicy::Reject)]
    inverted_range: InvertedRangePolicy,

    /// Whether a "None" referral draw is written as a row
    #[arg(long, value_enum, default_value_t = NoneReferralPolicy::Record)]
    none_referrals: NoneReferralPolicy,

    /// Also write summary.json next to the tables
    #[arg(long)]
    summary_json: bool,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn into_config(self) -> GeneratorConfig {
        let builder = GeneratorConfig::builder().seed(self.seed);
        let builder = if self.unseeded { builder.unseeded() } else { builder };

        builder
            .date_range(self.start, self.end)
            .output_dir(self.output_dir)
            .output_format(self.format)
            .inverted_range(self.inverted_range)
            .none_referrals(self.none_referrals)
            .write_summary_json(self.summary_json)
            .show_progress(!self.no_progress)
            .build()
    }
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config();
    info!("Starting ED data generation with configuration:\n{config}");

    let start = Instant::now();
    let mut generator = EdDataGenerator::new(config)?;
    let (_, summary) = generator.generate_all_data()?;

    info!("{summary}");
    info!(
        "Data written to {} in {:?}",
        generator.config().output_dir.display(),
        start.elapsed()
    );
    Ok(())
}
