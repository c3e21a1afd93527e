//! Orchestrates a full generation run
//!
//! [`EdDataGenerator`] owns the seeded random source and the validated
//! distributions, and produces visits, staff hours and referrals in that
//! order from the same source.

use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::rngs::StdRng;

use crate::algorithm::generation::referrals::{generate_referrals, referral_destinations};
use crate::algorithm::generation::staff::generate_staff_hours;
use crate::algorithm::generation::visits::{VisitModel, generate_visits};
use crate::algorithm::sampling::{WeightedTable, seeded_rng};
use crate::algorithm::summary::DataSummary;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::io::EdDataset;
use crate::models::{Referral, StaffHours, Visit};

/// Synthetic ED data generator
#[derive(Debug)]
pub struct EdDataGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    visit_model: VisitModel,
    referral_destinations: WeightedTable<&'static str>,
}

impl EdDataGenerator {
    /// Create a generator, validating the configuration first
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let rng = seeded_rng(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create a generator around an existing random source
    ///
    /// The configured seed is ignored; the caller's source is used as is.
    pub fn with_rng(config: GeneratorConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            visit_model: VisitModel::new()?,
            referral_destinations: referral_destinations()?,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(self.config.day_count());
        match ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} days ({per_sec}) {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("#>-")),
            Err(e) => warn!("Falling back to default progress style: {e}"),
        }
        pb
    }

    /// Generate the visit table for the configured date range
    pub fn generate_patient_visits(&mut self) -> Vec<Visit> {
        if self.config.is_inverted() {
            warn!(
                "End date {} precedes start date {}; producing empty tables",
                self.config.end_date, self.config.start_date
            );
        }

        let pb = self.progress_bar();
        let visits = generate_visits(
            self.config.start_date,
            self.config.end_date,
            &self.visit_model,
            &mut self.rng,
            &pb,
        );
        pb.finish_and_clear();
        visits
    }

    /// Generate weekly hours for the roster over the weeks present in `visits`
    pub fn generate_staff_hours(&mut self, visits: &[Visit]) -> Vec<StaffHours> {
        generate_staff_hours(visits, &mut self.rng)
    }

    /// Generate referrals for the discharged visits in `visits`
    pub fn generate_referrals(&mut self, visits: &[Visit]) -> Vec<Referral> {
        generate_referrals(
            visits,
            &self.referral_destinations,
            self.config.none_referrals,
            &mut self.rng,
        )
    }

    /// Generate all three tables
    pub fn generate_all(&mut self) -> EdDataset {
        let start = Instant::now();

        info!("Generating patient visits...");
        let visits = self.generate_patient_visits();
        info!("Generated {} patient visits", visits.len());

        info!("Generating staff hours...");
        let staff_hours = self.generate_staff_hours(&visits);
        info!("Generated {} staff records", staff_hours.len());

        info!("Generating referrals...");
        let referrals = self.generate_referrals(&visits);
        info!("Generated {} referrals", referrals.len());

        info!("All data generated in {:?}", start.elapsed());
        EdDataset {
            visits,
            staff_hours,
            referrals,
        }
    }

    /// Generate all tables and write them to the configured output directory
    pub fn generate_all_data(&mut self) -> Result<(EdDataset, DataSummary)> {
        let dataset = self.generate_all();
        dataset.write(&self.config.output_dir, self.config.output_format)?;

        let summary = DataSummary::from_dataset(&dataset);
        if self.config.write_summary_json {
            summary.write_json(&self.config.output_dir.join(DataSummary::FILE_NAME))?;
        }

        Ok((dataset, summary))
    }
}
