//! Numerical constants

/// Number of points drawn by the harness when no sample count is given
pub const DEFAULT_N_SAMPLES: usize = 1_000_000;

/// Ratio of the unit square's area to the unit quarter-circle's area, over π.
///
/// A uniformly drawn point lands inside the quarter-circle with probability
/// π/4, so the inside fraction is scaled by 4.
pub const QUARTER_CIRCLE_SCALE: f64 = 4.0;
