use super::{constant::*, ConfigEntity};
use crate::{logging, utils, Error, Result};
use serde_yaml;
use std::env;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::str::FromStr;

// init_config_with_yaml resolves the general configuration.
// Priority: system environment > YAML file > default config
pub fn init_config_with_yaml(config_path: &mut String) -> Result<ConfigEntity> {
    let mut entity = apply_yaml_config_file(config_path)?;
    override_items_from_system_env(&mut entity)?;
    Ok(entity)
}

// apply_yaml_config_file loads general configuration from the given YAML file.
fn apply_yaml_config_file(config_path: &mut String) -> Result<ConfigEntity> {
    if utils::is_blank(config_path) {
        // If the config file path is absent, try to resolve it from the system env.
        *config_path = env::var(CONF_FILE_PATH_ENV_KEY).unwrap_or_else(|_| CONFIG_FILENAME.into());
    }
    if *config_path == CONFIG_FILENAME {
        return Ok(ConfigEntity::default());
    }
    load_config_from_yaml_file(config_path)
}

pub fn load_config_from_yaml_file(path_str: &str) -> Result<ConfigEntity> {
    let path = Path::new(path_str);
    if !path.exists() {
        return Err(Error::msg(format!(
            "error rate YAML configuration file {} does not exist",
            path_str
        )));
    }
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    let entity: ConfigEntity = serde_yaml::from_str(&content)?;
    entity.check()?;
    logging::info!("[Config] Resolving error rate config from file, file {}", path_str);
    Ok(entity)
}

// override_items_from_system_env applies the values present in system env on top of `entity`.
pub fn override_items_from_system_env(entity: &mut ConfigEntity) -> Result<()> {
    let estimator = &mut entity.config.estimator;
    if let Some(inertness) = env_value(INERTNESS_ENV_KEY)? {
        estimator.inertness = inertness;
    }
    if let Some(threshold) = env_value(THRESHOLD_ENV_KEY)? {
        estimator.threshold = threshold;
    }
    if let Some(factor) = env_value(RANDOM_PASS_FACTOR_ENV_KEY)? {
        estimator.random_pass_factor = factor;
    }
    entity.check()
}

fn env_value<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) if !utils::is_blank(&value) => {
            let parsed = value.trim().parse::<T>().map_err(|err| {
                Error::new(err).context(format!("illegal value {:?} of env {}", value, key))
            })?;
            Ok(Some(parsed))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
lazy_static::lazy_static! {
    // serializes tests touching the `ERRORRATE_*` system env
    pub(crate) static ref ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
}
