use super::{AtomicF64, EstimatorTrait, ParseError};
use crate::{config::EstimatorConfig, logging, Result};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::collections::HashMap;
use std::fmt;

/// Field name of the probability in the persisted record.
pub const ERROR_PROBABILITY_FIELD: &str = "error_probability";

#[derive(Serialize)]
struct RecordRef<'a> {
    error_probability: &'a AtomicF64,
}

#[derive(Deserialize)]
struct RecordOwned {
    // a missing field is tolerated, a present one must be a number (`null` included)
    #[serde(default, deserialize_with = "present_probability")]
    error_probability: Option<AtomicF64>,
}

fn present_probability<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<AtomicF64>, D::Error> {
    AtomicF64::deserialize(deserializer).map(Some)
}

/// `ErrorRateEstimator` keeps a relaxation-exponent curve of the error rate,
/// i.e. the probability that the next event fails, in `[0, 1)`.
///
/// It starts from the threshold, so it bounces right away if the first events are errors,
/// and decays away from it otherwise.
pub struct ErrorRateEstimator {
    error_probability: AtomicF64,
    // amount of events needed to move `error_probability` essentially
    inertness: f64,
    // level of error probability on which events are bounced
    threshold: f64,
    // exponent applied to the uniform sample in `is_exceeded`, see there
    random_pass_factor: f64,
}

impl Default for ErrorRateEstimator {
    fn default() -> Self {
        Self::with_config(&EstimatorConfig::default())
    }
}

impl ErrorRateEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `with_config` builds an estimator from validated tuning values,
    /// see `ConfigEntity::check()`.
    pub fn with_config(config: &EstimatorConfig) -> Self {
        Self {
            error_probability: AtomicF64::new(config.threshold),
            inertness: config.inertness as f64,
            threshold: config.threshold,
            random_pass_factor: config.random_pass_factor,
        }
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    pub fn inertness(&self) -> f64 {
        self.inertness
    }

    /// `is_exceeded_with_rng` is `is_exceeded` drawing its sample from `rng`.
    ///
    /// Once the probability reaches the threshold, a plain comparison would bounce every event forever:
    /// bounced events are never attempted, so no success could be recorded to lower the probability again.
    /// The sample raised to `random_pass_factor` is close to 1 most of the time,
    /// and only occasionally drags the product under the threshold to let an event through.
    pub fn is_exceeded_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        let sample: f64 = rng.gen();
        self.probability() * sample.powf(self.random_pass_factor) > self.threshold
    }
}

impl EstimatorTrait for ErrorRateEstimator {
    fn record_outcome(&self, is_error: bool) {
        let current = if is_error { 1.0 } else { 0.0 };
        // load, compute, store: racing updates may overwrite each other
        let updated =
            (self.error_probability.get() * self.inertness + current) / (self.inertness + 1.0);
        self.error_probability.set(updated);
    }

    #[inline]
    fn probability(&self) -> f64 {
        self.error_probability.get()
    }

    fn set_probability(&self, probability: f64) {
        warn_out_of_range(probability);
        self.error_probability.set(probability);
    }

    fn is_exceeded(&self) -> bool {
        self.is_exceeded_with_rng(&mut rand::thread_rng())
    }

    fn marshal_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn unmarshal_json(&self, data: &[u8]) -> std::result::Result<(), ParseError> {
        // only a JSON object is a valid record; its values are kept as raw tokens
        let record: HashMap<String, Box<RawValue>> = serde_json::from_slice(data)?;
        if let Some(raw) = record.get(ERROR_PROBABILITY_FIELD) {
            self.error_probability.set_from_str(raw.get().trim())?;
            warn_out_of_range(self.error_probability.get());
        }
        Ok(())
    }
}

fn warn_out_of_range(probability: f64) {
    if !(0.0..1.0).contains(&probability) {
        logging::OUT_OF_RANGE_ONCE.call_once(|| {
            logging::warn!(
                "[ErrorRate] Error probability {} is out of [0, 1), accepted without clamping",
                probability
            );
        });
    }
}

impl fmt::Debug for ErrorRateEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRateEstimator")
            .field(ERROR_PROBABILITY_FIELD, &self.error_probability)
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl Serialize for ErrorRateEstimator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RecordRef {
            error_probability: &self.error_probability,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ErrorRateEstimator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = RecordOwned::deserialize(deserializer)?;
        let estimator = ErrorRateEstimator::default();
        if let Some(probability) = record.error_probability {
            estimator.error_probability.set(probability.get());
        }
        Ok(estimator)
    }
}
