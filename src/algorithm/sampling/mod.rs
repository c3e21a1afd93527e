//! Random sampling primitives
//!
//! All draws take an explicitly passed random source so that generators with
//! different seeds never share state.

pub mod distributions;
pub mod weighted;

pub use distributions::{DailyVolume, SeverityTiming, WEEKDAY_MEAN_VISITS, WEEKEND_MEAN_VISITS};
pub use weighted::WeightedTable;

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Create the generator's random source from an optional seed
///
/// Without a seed the source is drawn from OS entropy and runs are not
/// reproducible.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed_value) => StdRng::seed_from_u64(seed_value),
        None => StdRng::from_os_rng(),
    }
}

/// Bernoulli draw with a fixed probability
pub fn chance<R: Rng + ?Sized>(probability: f64, rng: &mut R) -> bool {
    rng.random::<f64>() < probability
}

/// Uniform pick from a non-empty fixed list
pub fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.random_range(0..items.len())]
}
