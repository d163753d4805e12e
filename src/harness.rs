//! Timed side-by-side runs of the scalar and batch estimators
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use std::fmt;
use std::time::{Duration, Instant};

use crate::consts::DEFAULT_N_SAMPLES;
use crate::estimator::{Batch, Scalar};
use crate::tally::EstimateError;
use crate::traits::PiEstimator;

/// Settings for one comparative run
///
/// # Example
///
/// ```
/// use mcpi::harness::HarnessConfig;
///
/// let config = HarnessConfig::default().with_n_samples(1_000).with_seed(7);
/// assert_eq!(config.n_samples(), 1_000);
/// assert_eq!(config.seed(), Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct HarnessConfig {
    n_samples: usize,
    seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            n_samples: DEFAULT_N_SAMPLES,
            seed: None,
        }
    }
}

impl HarnessConfig {
    /// Number of points each estimator draws
    #[must_use]
    pub fn with_n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }

    /// Seed both random streams for a reproducible run
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Two generators that never share draws.
    ///
    /// With a seed, the second stream is the first advanced by 2^128 steps.
    pub fn rngs(&self) -> (Xoshiro256Plus, Xoshiro256Plus) {
        match self.seed {
            Some(seed) => {
                trace!("seeding both streams from {seed}");
                let first = Xoshiro256Plus::seed_from_u64(seed);
                let mut second = first.clone();
                second.jump();
                (first, second)
            }
            None => {
                trace!("seeding both streams from system entropy");
                (
                    Xoshiro256Plus::from_entropy(),
                    Xoshiro256Plus::from_entropy(),
                )
            }
        }
    }
}

/// One timed estimator call
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Trial {
    pub strategy: String,
    pub estimate: f64,
    pub n_samples: usize,
    pub elapsed: Duration,
}

impl Trial {
    /// Wall-clock duration of the call in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for Trial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pi = {} for {} iterations. This took {} seconds",
            self.estimate,
            self.n_samples,
            self.elapsed_secs()
        )
    }
}

/// The scalar and batch trials of one run, in that order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Comparison {
    pub scalar: Trial,
    pub batch: Trial,
}

impl Comparison {
    /// How many times faster the batch estimator ran than the scalar one.
    ///
    /// `None` when the batch run took no measurable time.
    pub fn speedup(&self) -> Option<f64> {
        let batch = self.batch.elapsed_secs();
        if batch > 0.0 {
            Some(self.scalar.elapsed_secs() / batch)
        } else {
            None
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.scalar)?;
        write!(f, "{}", self.batch)
    }
}

/// Run `estimator` once with `n` samples and time it
pub fn time_trial<E, R>(
    estimator: &E,
    n: usize,
    rng: &mut R,
) -> Result<Trial, EstimateError>
where
    E: PiEstimator,
    R: Rng,
{
    debug!("running {} estimator with {n} samples", estimator.name());

    let start = Instant::now();
    let estimate = estimator.estimate(n, rng)?;
    let elapsed = start.elapsed();

    debug!(
        "{} estimator finished in {:?} (pi = {estimate})",
        estimator.name(),
        elapsed
    );

    Ok(Trial {
        strategy: estimator.name().to_string(),
        estimate,
        n_samples: n,
        elapsed,
    })
}

/// Time the scalar estimator, then the batch estimator, on independent
/// random streams.
///
/// # Errors
///
/// Returns [`EstimateError::ZeroSamples`] when the configured sample count is
/// zero.
pub fn run(config: &HarnessConfig) -> Result<Comparison, EstimateError> {
    let (mut scalar_rng, mut batch_rng) = config.rngs();
    let n = config.n_samples();

    let scalar = time_trial(&Scalar, n, &mut scalar_rng)?;
    let batch = time_trial(&Batch, n, &mut batch_rng)?;

    Ok(Comparison { scalar, batch })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn trial(estimate: f64, n_samples: usize, millis: u64) -> Trial {
        Trial {
            strategy: String::from("scalar"),
            estimate,
            n_samples,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.n_samples(), DEFAULT_N_SAMPLES);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn trial_display() {
        let t = trial(3.14, 1_000_000, 1_500);
        assert_eq!(
            t.to_string(),
            "pi = 3.14 for 1000000 iterations. This took 1.5 seconds"
        );
    }

    #[test]
    fn comparison_display_puts_scalar_first() {
        let cmp = Comparison {
            scalar: trial(3.0, 4, 2_000),
            batch: trial(2.0, 4, 500),
        };
        let out = cmp.to_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("pi = 3 for 4 iterations"));
        assert!(lines[1].starts_with("pi = 2 for 4 iterations"));
        assert::close(cmp.speedup().unwrap(), 4.0, 1E-12);
    }

    #[test]
    fn speedup_of_instant_batch_is_none() {
        let cmp = Comparison {
            scalar: trial(3.0, 4, 2_000),
            batch: trial(2.0, 4, 0),
        };
        assert_eq!(cmp.speedup(), None);
    }

    #[test]
    fn seeded_streams_are_reproducible() {
        let config = HarnessConfig::default().with_seed(0x1234);
        let (mut a1, mut b1) = config.rngs();
        let (mut a2, mut b2) = config.rngs();
        assert_eq!(a1.gen::<u64>(), a2.gen::<u64>());
        assert_eq!(b1.gen::<u64>(), b2.gen::<u64>());
    }

    #[test]
    fn seeded_streams_differ() {
        let (mut a, mut b) = HarnessConfig::default().with_seed(42).rngs();
        let xs: Vec<u64> = (0..8).map(|_| a.gen()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.gen()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn time_trial_reports_sample_count() {
        let mut rng = Xoshiro256Plus::seed_from_u64(7);
        let t = time_trial(&Batch, 10_000, &mut rng).unwrap();
        assert_eq!(t.strategy, "batch");
        assert_eq!(t.n_samples, 10_000);
        assert!((0.0..=4.0).contains(&t.estimate));
    }

    #[test]
    fn run_seeded() {
        let config = HarnessConfig::default()
            .with_n_samples(100_000)
            .with_seed(0xABCD);
        let cmp = run(&config).unwrap();

        assert_eq!(cmp.scalar.strategy, "scalar");
        assert_eq!(cmp.batch.strategy, "batch");
        assert!((cmp.scalar.estimate - PI).abs() < 0.05);
        assert!((cmp.batch.estimate - PI).abs() < 0.05);

        let again = run(&config).unwrap();
        assert_eq!(cmp.scalar.estimate, again.scalar.estimate);
        assert_eq!(cmp.batch.estimate, again.batch.estimate);
    }

    #[test]
    fn run_with_zero_samples_fails() {
        let config = HarnessConfig::default().with_n_samples(0).with_seed(1);
        assert_eq!(run(&config), Err(EstimateError::ZeroSamples));
    }

    #[cfg(feature = "serde1")]
    #[test]
    fn serde_config() {
        let config = HarnessConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"n_samples":1000000,"seed":3}"#);
    }
}
