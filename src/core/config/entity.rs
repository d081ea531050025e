use super::constant::*;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// EstimatorConfig represents the tuning values of an error-rate estimator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EstimatorConfig {
    // inertness is the amount of events required to essentially change the error probability.
    pub inertness: u32,
    // threshold is the error probability on which events are bounced.
    pub threshold: f64,
    // random_pass_factor is the exponent of the random dampener used while bouncing.
    // The greater it is, the more events are passed even though the threshold is reached.
    pub random_pass_factor: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            inertness: ERROR_PROBABILITY_INERTNESS,
            threshold: ERROR_PROBABILITY_THRESHOLD,
            random_pass_factor: RANDOM_PASS_FACTOR,
        }
    }
}

// LogConfig represent the configuration of logging.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    // config_file is only consulted by the log4rs backend.
    pub config_file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            config_file: LOG_CONFIG_FILE.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ErrorRateConfig {
    pub estimator: EstimatorConfig,
    pub log: LogConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConfigEntity {
    pub version: String,
    pub config: ErrorRateConfig,
}

impl Default for ConfigEntity {
    fn default() -> Self {
        ConfigEntity {
            version: ERRORRATE_VERSION.into(),
            config: ErrorRateConfig::default(),
        }
    }
}

impl ConfigEntity {
    pub fn new() -> Self {
        ConfigEntity::default()
    }

    pub fn check(&self) -> Result<()> {
        if self.version.is_empty() {
            return Err(Error::msg("empty version"));
        }
        let estimator = &self.config.estimator;
        if estimator.inertness == 0 {
            return Err(Error::msg(
                "illegal estimator configuration: inertness must be positive",
            ));
        }
        if !estimator.threshold.is_finite()
            || estimator.threshold <= 0.0
            || estimator.threshold >= 1.0
        {
            return Err(Error::msg(format!(
                "illegal estimator configuration: threshold {} is out of (0, 1)",
                estimator.threshold
            )));
        }
        if !estimator.random_pass_factor.is_finite() || estimator.random_pass_factor <= 0.0 {
            return Err(Error::msg(format!(
                "illegal estimator configuration: random_pass_factor {} must be positive",
                estimator.random_pass_factor
            )));
        }
        Ok(())
    }
}
