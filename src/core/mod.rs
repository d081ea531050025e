pub mod config;
// the estimator itself
pub mod errorrate;
