#![cfg_attr(docsrs, feature(doc_cfg))]

//! # errorrate
//!
//! A self-adjusting error-rate estimator. It decides, on each attempted event of a fallible process
//! (e.g. outbound calls), whether to proceed or to bounce it, based on recent failure history.
//!
//! It is neither a rate limiter (the request volume is not counted)
//! nor a circuit breaker with explicit states: the whole history is folded
//! into a single error probability, shared lock-free by all callers.
//!
//! ## Add Dependency
//!
//! ```toml
//! [dependencies]
//! errorrate = { version = "0.1.0", features = ["logger_env"] }
//! ```
//!
//! Optional features lists:
//! - logger_env: Use `env_logger` to initialize logging.
//! - logger_log4rs: Use `log4rs` to initialize logging.
//!
//! ## Usage
//!
//! ```rust
//! use errorrate::{guard, init_default, ErrorRateEstimator, EstimatorTrait};
//!
//! let config = init_default().unwrap();
//! let estimator = ErrorRateEstimator::with_config(&config.config.estimator);
//!
//! // bounced events never call the closure, attempted ones are recorded
//! match guard(&estimator, || call_remote()) {
//!     Ok(resp) => {}
//!     Err(err) if err.is_bounced() => {}
//!     Err(err) => {}
//! }
//!
//! // persist the state and restore it later
//! let state = estimator.marshal_json().unwrap();
//! estimator.unmarshal_json(state.as_bytes()).unwrap();
//! ```
//!
//! Estimators are plain values: own one per throttled process and pass it around explicitly,
//! e.g. in an `Arc`, so that independent processes do not contaminate each other.

/// Estimator API
pub mod api;
/// Core implementations, including the estimator and its configuration.
pub mod core;
/// Adapters for different logging crates.
pub mod logging;
// Utility functions.
pub mod utils;

// re-export precludes
pub use crate::core::errorrate::*;
pub use crate::core::*;
pub use api::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
