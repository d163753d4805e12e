//! Whole-collection estimator
use nalgebra::DVector;
use rand::Rng;

use crate::geometry::{radius_sq, within_unit_radius};
use crate::tally::{EstimateError, Tally};
use crate::traits::PiEstimator;

/// Estimates π by drawing every coordinate up front and classifying the whole
/// collection with bulk vector arithmetic.
///
/// All `n` x-coordinates are drawn first, then all `n` y-coordinates. The
/// squared radii overwrite the x vector in one pass over both vectors, so the
/// auxiliary memory is the two O(n) coordinate vectors.
///
/// # Example
///
/// ```
/// use mcpi::prelude::*;
///
/// let xs = [0.1, 0.9, 0.5, 0.99];
/// let ys = [0.1, 0.9, 0.5, 0.01];
/// let tally = Batch.tally_coords(&xs, &ys).unwrap();
///
/// assert_eq!(tally.n_inside(), 3);
/// assert_eq!(tally.pi(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Batch;

impl Batch {
    /// Classify caller-supplied coordinate slices, pairing `xs[i]` with
    /// `ys[i]`
    pub fn tally_coords(
        &self,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<Tally, EstimateError> {
        if xs.len() != ys.len() {
            Err(EstimateError::LengthMismatch {
                n_x: xs.len(),
                n_y: ys.len(),
            })
        } else if xs.is_empty() {
            Err(EstimateError::ZeroSamples)
        } else {
            let n = xs.len();
            let xs = DVector::from_column_slice(xs);
            let ys = DVector::from_column_slice(ys);
            Ok(Tally::new_unchecked(count_inside(xs, &ys), n))
        }
    }
}

/// Consumes `xs` as the buffer for the squared radii
fn count_inside(mut xs: DVector<f64>, ys: &DVector<f64>) -> usize {
    xs.zip_apply(ys, |x, y| *x = radius_sq(*x, y));
    xs.iter().filter(|&&r2| within_unit_radius(r2)).count()
}

impl PiEstimator for Batch {
    fn name(&self) -> &'static str {
        "batch"
    }

    fn tally<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Tally, EstimateError> {
        if n == 0 {
            return Err(EstimateError::ZeroSamples);
        }

        let xs: DVector<f64> = DVector::from_fn(n, |_, _| rng.gen());
        let ys: DVector<f64> = DVector::from_fn(n, |_, _| rng.gen());

        Ok(Tally::new_unchecked(count_inside(xs, &ys), n))
    }
}
