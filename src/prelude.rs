//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::estimator::*;
#[doc(no_inline)]
pub use crate::tally::{EstimateError, Tally};
#[doc(no_inline)]
pub use crate::traits::*;
