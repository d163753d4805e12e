//! Point-at-a-time estimator
use rand::Rng;

use crate::geometry::in_quarter_circle;
use crate::tally::{EstimateError, Tally};
use crate::traits::PiEstimator;

/// Estimates π by drawing and classifying one point at a time.
///
/// Holds a single running counter, so auxiliary memory is O(1) in the number
/// of samples.
///
/// # Example
///
/// ```
/// use mcpi::prelude::*;
///
/// let points = vec![(0.1, 0.1), (0.9, 0.9), (0.5, 0.5), (0.99, 0.01)];
/// let tally = Scalar.tally_points(points).unwrap();
///
/// assert_eq!(tally.n_inside(), 3);
/// assert_eq!(tally.pi(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scalar;

impl Scalar {
    /// Classify a caller-supplied sequence of `(x, y)` points
    pub fn tally_points<I>(&self, points: I) -> Result<Tally, EstimateError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (n_inside, n_samples) =
            points.into_iter().fold((0, 0), |(inside, total), (x, y)| {
                (inside + usize::from(in_quarter_circle(x, y)), total + 1)
            });
        Tally::new(n_inside, n_samples)
    }
}

impl PiEstimator for Scalar {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn tally<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Tally, EstimateError> {
        if n == 0 {
            return Err(EstimateError::ZeroSamples);
        }

        let mut n_inside = 0;
        for _ in 0..n {
            let x: f64 = rng.gen();
            let y: f64 = rng.gen();
            if in_quarter_circle(x, y) {
                n_inside += 1;
            }
        }

        Ok(Tally::new_unchecked(n_inside, n))
    }
}
