//! Initialization resolves the runtime environment of the estimators, including:
//! 1. the config, from manually config or yaml file or env variable
//! 2. the global logger

use crate::{config, config::ConfigEntity, logging, Result};

/// `init_default` resolves the configuration from system
/// environment and the default value, and initializes logging.
#[inline]
pub fn init_default() -> Result<ConfigEntity> {
    init_with_config_file(&mut String::new())
}

/// `init_with_config` validates the given config and initializes logging.
#[inline]
pub fn init_with_config(config_entity: ConfigEntity) -> Result<ConfigEntity> {
    config_entity.check()?;
    init_log(&config_entity);
    Ok(config_entity)
}

/// `init_with_config_file` loads the configuration from the given YAML file,
/// overrides it from system environment and initializes logging.
/// A blank path falls back to `ERRORRATE_CONFIG_FILE_PATH`, then to the defaults.
#[inline]
pub fn init_with_config_file(config_path: &mut String) -> Result<ConfigEntity> {
    let config_entity = config::init_config_with_yaml(config_path)?;
    init_log(&config_entity);
    Ok(config_entity)
}

fn init_log(config_entity: &ConfigEntity) {
    logging::logger_init(Some(config_entity.config.log.config_file.clone()));
    logging::info!(
        "[Config] Print effective config, config {:?}",
        config_entity
    );
}
