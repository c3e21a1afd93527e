//! Continuous and count distributions used by the generator
//!
//! Wraps `rand_distr` so that parameter validation happens once, when the
//! model is built, and draws afterwards are infallible.

use rand::Rng;
use rand_distr::{Distribution, Exp, Normal, Poisson};

use crate::error::{EdSynthError, Result};
use crate::models::EsiLevel;

/// Mean daily arrivals on Saturdays and Sundays
pub const WEEKEND_MEAN_VISITS: f64 = 8.0;
/// Mean daily arrivals Monday to Friday
pub const WEEKDAY_MEAN_VISITS: f64 = 12.0;

/// Mean of the exponential door-to-doctor component, indexed by ESI - 1
pub const WAIT_BASE_MINUTES: [f64; 5] = [5.0, 30.0, 60.0, 90.0, 120.0];
/// Base length of stay, indexed by ESI - 1; the exponential mean is half of it
pub const LOS_BASE_MINUTES: [f64; 5] = [600.0, 500.0, 400.0, 300.0, 200.0];

const WAIT_NOISE: (f64, f64) = (40.0, 30.0);
const LOS_NOISE: (f64, f64) = (200.0, 150.0);

/// Poisson daily volume for weekdays and weekends
#[derive(Debug, Clone)]
pub struct DailyVolume {
    weekday: Poisson<f64>,
    weekend: Poisson<f64>,
}

impl DailyVolume {
    pub fn new(weekday_mean: f64, weekend_mean: f64) -> Result<Self> {
        let poisson = |mean: f64| {
            Poisson::new(mean)
                .map_err(|e| EdSynthError::sampling(format!("Invalid Poisson mean {mean}: {e}")))
        };
        Ok(Self {
            weekday: poisson(weekday_mean)?,
            weekend: poisson(weekend_mean)?,
        })
    }

    /// Draw the number of visits for one day
    pub fn draw<R: Rng + ?Sized>(&self, weekend: bool, rng: &mut R) -> u32 {
        let dist = if weekend { &self.weekend } else { &self.weekday };
        dist.sample(rng) as u32
    }
}

/// Exponential-plus-normal timing model conditioned on severity
///
/// A draw is `trunc(Exp(mean) + Normal(mu, sigma))`, then floored at a
/// minimum, with the exponential mean chosen by ESI level.
#[derive(Debug, Clone)]
pub struct SeverityTiming {
    means: [f64; 5],
    by_level: [Exp<f64>; 5],
    noise: Normal<f64>,
    floor: u32,
}

impl SeverityTiming {
    pub fn new(means: [f64; 5], noise: (f64, f64), floor: u32) -> Result<Self> {
        let mut by_level = Vec::with_capacity(5);
        for mean in means {
            if mean <= 0.0 {
                return Err(EdSynthError::sampling(format!(
                    "Exponential mean must be positive, got {mean}"
                )));
            }
            let exp = Exp::new(1.0 / mean)
                .map_err(|e| EdSynthError::sampling(format!("Invalid exponential mean {mean}: {e}")))?;
            by_level.push(exp);
        }
        let by_level: [Exp<f64>; 5] = by_level
            .try_into()
            .map_err(|_| EdSynthError::sampling("Expected five severity levels"))?;

        if !(noise.1.is_finite() && noise.1 >= 0.0) {
            return Err(EdSynthError::sampling(format!(
                "Noise standard deviation must be finite and non-negative, got {}",
                noise.1
            )));
        }
        let noise = Normal::new(noise.0, noise.1).map_err(|e| {
            EdSynthError::sampling(format!("Invalid normal parameters {noise:?}: {e}"))
        })?;

        Ok(Self {
            means,
            by_level,
            noise,
            floor,
        })
    }

    /// Door-to-doctor model: floor 1 minute
    pub fn door_to_doctor() -> Result<Self> {
        Self::new(WAIT_BASE_MINUTES, WAIT_NOISE, 1)
    }

    /// Length-of-stay model: floor 30 minutes, exponential mean is half the base
    pub fn length_of_stay() -> Result<Self> {
        Self::new(LOS_BASE_MINUTES.map(|base| base / 2.0), LOS_NOISE, 30)
    }

    /// Mean of the exponential component for a level
    #[must_use]
    pub fn exponential_mean(&self, esi: EsiLevel) -> f64 {
        self.means[usize::from(esi.value() - 1)]
    }

    /// Draw minutes for a visit at the given severity
    pub fn draw<R: Rng + ?Sized>(&self, esi: EsiLevel, rng: &mut R) -> u32 {
        let exp = &self.by_level[usize::from(esi.value() - 1)];
        let raw = exp.sample(rng) + self.noise.sample(rng);
        // Truncate toward zero before flooring, so -0.7 becomes 0 and then the floor
        let minutes = raw.trunc();
        if minutes < f64::from(self.floor) {
            self.floor
        } else {
            minutes as u32
        }
    }
}
