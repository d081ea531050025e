//! Relaxation-exponent curve of the error rate, expressed as the probability of an error
//! on the next event, in `[0, 1)`.
//!
//! It could be used to limit the error rate of any processor: ask `is_exceeded()` before each event,
//! and report the outcome of every attempted event through `record_outcome()`.

pub mod atomic_float;
pub mod error;
pub mod estimator;

pub use atomic_float::*;
pub use error::*;
pub use estimator::*;

use crate::Result;

/// `EstimatorTrait` is the capability set of an error-rate estimator.
/// Callers should depend on it rather than on `ErrorRateEstimator`, so that doubles can stand in.
pub trait EstimatorTrait: Send + Sync {
    /// `record_outcome` adds the result of a recently attempted event to the history.
    fn record_outcome(&self, is_error: bool);

    /// `probability` returns the probability of an error on the next try.
    fn probability(&self) -> f64;

    /// `set_probability` overwrites the probability of an error on the next try, without validation.
    fn set_probability(&self, probability: f64);

    /// `is_exceeded` checks if the error rate is exceeded and the next event should be bounced.
    fn is_exceeded(&self) -> bool;

    /// `marshal_json` encodes the state as `{"error_probability":<number>}`.
    fn marshal_json(&self) -> Result<String>;

    /// `unmarshal_json` restores the state encoded by `marshal_json`.
    /// Unknown fields are ignored, a missing `error_probability` keeps the current value.
    fn unmarshal_json(&self, data: &[u8]) -> std::result::Result<(), ParseError>;
}

#[cfg(test)]
pub(crate) use test::MockEstimator;
