use super::ParseError;
use serde::{ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// `AtomicF64` is a lock-free `f64` cell.
/// The bit pattern of the float lives in an `AtomicU64`,
/// so every load and store is a single word-sized atomic access.
#[derive(Default)]
pub struct AtomicF64(AtomicU64);

impl AtomicF64 {
    pub fn new(value: f64) -> Self {
        AtomicF64(AtomicU64::new(value.to_bits()))
    }

    #[inline]
    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Acquire))
    }

    #[inline]
    pub fn set(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Release)
    }

    /// `set_from_str` parses `text` and stores the result.
    /// The range is not checked, and on failure the current value is kept.
    pub fn set_from_str(&self, text: &str) -> Result<(), ParseError> {
        let value = parse_f64(text)?;
        self.set(value);
        Ok(())
    }
}

fn parse_f64(text: &str) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .map_err(|source| ParseError::InvalidNumber {
            text: text.into(),
            source,
        })
}

impl fmt::Debug for AtomicF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

// `Display` of `f64` already yields the shortest text that round-trips, without exponent.
impl fmt::Display for AtomicF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl FromStr for AtomicF64 {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_f64(text).map(AtomicF64::new)
    }
}

impl From<f64> for AtomicF64 {
    fn from(value: f64) -> Self {
        AtomicF64::new(value)
    }
}

// The JSON number token is the `Display` text, e.g. `0` and `0.0000001` rather than `0.0` and `1e-7`.
// Non-finite values have no JSON token and fail.
impl Serialize for AtomicF64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.to_string()).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AtomicF64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(AtomicF64::new)
    }
}
