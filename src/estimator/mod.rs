//! π estimators
mod batch;
mod scalar;

pub use batch::Batch;
pub use scalar::Scalar;
