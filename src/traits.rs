//! Trait definitions
use rand::Rng;

use crate::tally::{EstimateError, Tally};

/// A strategy for estimating π by sampling the unit square.
///
/// Implementors draw `n` points uniformly from [0, 1)², count those strictly
/// inside the unit quarter-circle, and report the count as a [`Tally`].
///
/// # Example
///
/// ```
/// use mcpi::prelude::*;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(0xABCD);
/// let pi = Scalar.estimate(10_000, &mut rng).unwrap();
/// assert!((0.0..=4.0).contains(&pi));
/// ```
pub trait PiEstimator {
    /// Short label used in logs and reports
    fn name(&self) -> &'static str;

    /// Draw `n` points from `rng` and count how many fall inside.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::ZeroSamples`] if `n` is zero. Nothing is
    /// drawn in that case.
    fn tally<R: Rng>(&self, n: usize, rng: &mut R)
        -> Result<Tally, EstimateError>;

    /// Draw `n` points from `rng` and return the π estimate
    fn estimate<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<f64, EstimateError> {
        self.tally(n, rng).map(|tally| tally.pi())
    }
}
