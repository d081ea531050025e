use std::num::ParseFloatError;
use thiserror::Error;

/// `ParseError` is returned when persisted error-rate state cannot be decoded.
/// The target estimator is never mutated when it is returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not a valid decimal or exponential number.
    #[error("invalid error probability {text:?}: {source}")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseFloatError,
    },
    /// The input is not a JSON object, or `error_probability` is not a number.
    #[error("malformed error rate record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}
