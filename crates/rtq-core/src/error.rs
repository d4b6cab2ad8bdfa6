//! Error types for rtq-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuantityError>;

/// Configuration mistakes surfaced to the caller.
///
/// Numerical domain conditions (zero von Mises stress in a triaxiality
/// request, an evaluation point sitting exactly on the rotation axis) are
/// deliberately *not* errors: they propagate as IEEE infinity/NaN so batch
/// callers can filter results after the fact.
#[derive(Error, Debug)]
pub enum QuantityError {
    /// A quantity name outside the closed selector set.
    #[error("unknown scalar quantity '{name}'; valid quantities are: {valid}")]
    UnknownQuantity { name: String, valid: String },

    /// Both axis endpoints were the same point.
    #[error("axis endpoints must be distinct, both were ({x}, {y}, {z})")]
    DegenerateAxis { x: f64, y: f64, z: f64 },
}
