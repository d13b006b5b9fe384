//! Configuration module with flow-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Account and password-reset flow settings (resend cooldown)
//! - `environment` - Environment detection and logging configuration
//! - `map` - Initial map region and area selection limits
//! - `project` - Project form settings (reference time zone)

pub mod auth;
pub mod environment;
pub mod map;
pub mod project;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

// Re-export commonly used types
pub use auth::AuthFlowConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use map::MapConfig;
pub use project::ProjectConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Account and reset flow configuration
    #[serde(default)]
    pub auth: AuthFlowConfig,

    /// Project form configuration
    #[serde(default)]
    pub project: ProjectConfig,

    /// Map selection configuration
    #[serde(default)]
    pub map: MapConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            auth: AuthFlowConfig::default(),
            project: ProjectConfig::default(),
            map: MapConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            auth: AuthFlowConfig::default(),
            project: ProjectConfig::default(),
            map: MapConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            auth: AuthFlowConfig::default(),
            project: ProjectConfig::default(),
            map: MapConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Starts from the preset for the detected environment and applies
    /// per-area overrides on top of it.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let mut config = match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        };

        config.auth = AuthFlowConfig::from_env();
        config.project = ProjectConfig::from_env();
        config.map = MapConfig::from_env();
        config.logging = config.logging.with_env_overrides();
        config
    }

    /// Check that every sub-configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.validate()?;
        self.project.reference_tz()?;
        self.map.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.auth.resend_cooldown_seconds, 30);
        assert_eq!(config.project.reference_time_zone, "America/Chicago");
    }

    #[test]
    fn test_production_preset() {
        let config = AppConfig::production();
        assert!(config.environment.is_production());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_time_zone_fails_validation() {
        let mut config = AppConfig::development();
        config.project.reference_time_zone = "Mars/Olympus_Mons".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownTimeZone { .. })
        ));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "environment": "staging" }"#).unwrap();
        assert!(config.environment.is_staging());
        assert_eq!(config.auth.tick_interval_ms, 1000);
        assert_eq!(config.map.min_area_points, 3);
    }
}
