// default app settings
pub const ERRORRATE_VERSION: &str = "v1";
pub const CONF_FILE_PATH_ENV_KEY: &str = "ERRORRATE_CONFIG_FILE_PATH";
pub const CONFIG_FILENAME: &str = "USE_DEFAULT_CONFIGURATION";

// default estimator settings
pub const ERROR_PROBABILITY_INERTNESS: u32 = 1000;
pub const ERROR_PROBABILITY_THRESHOLD: f64 = 0.67;
pub const RANDOM_PASS_FACTOR: f64 = 1.0 / 16.0;
pub const INERTNESS_ENV_KEY: &str = "ERRORRATE_INERTNESS";
pub const THRESHOLD_ENV_KEY: &str = "ERRORRATE_THRESHOLD";
pub const RANDOM_PASS_FACTOR_ENV_KEY: &str = "ERRORRATE_RANDOM_PASS_FACTOR";

// default log settings
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const LOG_CONFIG_FILE: &str = "testdata/config/log4rs.yaml";
