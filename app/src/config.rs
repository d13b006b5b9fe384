//! Configuration loading

use cams_shared::{AppConfig, ConfigError, Environment};

/// Load `.env` files, read the environment and validate the result.
///
/// The environment-specific file (`.env.development`, ...) is read first so
/// its values win over the generic `.env`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    config.validate()?;
    Ok(config)
}
