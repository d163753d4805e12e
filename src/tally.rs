//! Inside/total counts and the π estimate derived from them
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::fmt;

use crate::consts::QUARTER_CIRCLE_SCALE;

/// The outcome of classifying `n_samples` points, `n_inside` of which fell
/// inside the unit quarter-circle.
///
/// # Example
///
/// ```
/// use mcpi::Tally;
///
/// let tally = Tally::new(3, 4).unwrap();
/// assert_eq!(tally.pi(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Tally {
    n_inside: usize,
    n_samples: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum EstimateError {
    /// No points were drawn, so the inside fraction divides by zero
    ZeroSamples,
    /// The x and y coordinate collections have different lengths
    LengthMismatch { n_x: usize, n_y: usize },
    /// More points were counted inside than were sampled
    TooManyInside { n_inside: usize, n_samples: usize },
}

impl Tally {
    /// Create a new tally
    ///
    /// # Arguments
    /// - n_inside: number of points strictly inside the quarter-circle
    /// - n_samples: total number of points classified
    pub fn new(n_inside: usize, n_samples: usize) -> Result<Self, EstimateError> {
        if n_samples == 0 {
            Err(EstimateError::ZeroSamples)
        } else if n_inside > n_samples {
            Err(EstimateError::TooManyInside {
                n_inside,
                n_samples,
            })
        } else {
            Ok(Tally {
                n_inside,
                n_samples,
            })
        }
    }

    /// Creates a new tally without checking the counts.
    #[inline]
    #[must_use]
    pub fn new_unchecked(n_inside: usize, n_samples: usize) -> Self {
        Tally {
            n_inside,
            n_samples,
        }
    }

    /// Number of points inside the quarter-circle
    #[inline]
    pub fn n_inside(&self) -> usize {
        self.n_inside
    }

    /// Number of points classified
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Fraction of points inside, in [0, 1]
    #[inline]
    pub fn fraction_inside(&self) -> f64 {
        self.n_inside as f64 / self.n_samples as f64
    }

    /// The π estimate, `4 × n_inside / n_samples`, in [0, 4]
    #[inline]
    pub fn pi(&self) -> f64 {
        QUARTER_CIRCLE_SCALE * self.fraction_inside()
    }
}

impl std::error::Error for EstimateError {}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSamples => write!(
                f,
                "cannot estimate pi from zero samples (division by zero)"
            ),
            Self::LengthMismatch { n_x, n_y } => write!(
                f,
                "got {n_x} x coordinates but {n_y} y coordinates"
            ),
            Self::TooManyInside {
                n_inside,
                n_samples,
            } => write!(
                f,
                "inside count ({n_inside}) exceeds sample count ({n_samples})"
            ),
        }
    }
}
