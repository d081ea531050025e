//! mod `api` provides the topmost fundamental APIs for users of the estimator.
//! The configuration could be resolved in three ways:
//!
//!  1. `init_default()`, using default config and system env.
//!  2. `init_with_config(config_entity: ConfigEntity)`, using customized config entity.
//!  3. `init_with_config_file(config_path: &mut String)`, using yaml file.
//!
//! The resolved `ConfigEntity` is returned to the caller, who builds its estimators from it.
//! There is no process-wide estimator.

mod guard;
mod init;

pub use guard::*;
pub use init::*;
