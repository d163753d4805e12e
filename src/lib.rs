//! Monte Carlo estimation of π.
//!
//! Points are drawn uniformly from the unit square [0, 1)². The fraction that
//! lands strictly inside the unit quarter-circle (`x² + y² < 1`) approaches
//! π/4, so `4 × inside / total` estimates π with error on the order of
//! `1/√n`.
//!
//! Two estimators implement the same procedure at different levels of
//! batching:
//!
//! - [`Scalar`](estimator::Scalar) draws and classifies one point at a time.
//! - [`Batch`](estimator::Batch) draws every coordinate first and classifies
//!   the whole collection with vector arithmetic.
//!
//! The [`harness`] module times both on the same sample count.
//!
//! # Example
//!
//! ```
//! use mcpi::prelude::*;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256Plus;
//!
//! let mut rng = Xoshiro256Plus::seed_from_u64(0x1234);
//!
//! let scalar = Scalar.estimate(100_000, &mut rng).unwrap();
//! let batch = Batch.estimate(100_000, &mut rng).unwrap();
//!
//! assert!((scalar - std::f64::consts::PI).abs() < 0.05);
//! assert!((batch - std::f64::consts::PI).abs() < 0.05);
//! ```

pub mod consts;
pub mod estimator;
pub mod geometry;
pub mod harness;
pub mod prelude;
mod tally;
pub mod traits;

pub use tally::{EstimateError, Tally};
