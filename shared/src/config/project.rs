//! Project form configuration

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Time zone project end dates are compared in
pub const DEFAULT_REFERENCE_TIME_ZONE: &str = "America/Chicago";

/// Settings for the add-project form
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// IANA name of the zone used to decide "today" for end-date checks
    #[serde(default = "default_reference_time_zone")]
    pub reference_time_zone: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            reference_time_zone: default_reference_time_zone(),
        }
    }
}

impl ProjectConfig {
    pub fn from_env() -> Self {
        Self {
            reference_time_zone: std::env::var("CAMS_REFERENCE_TIME_ZONE")
                .unwrap_or_else(|_| default_reference_time_zone()),
        }
    }

    /// Parse the configured zone name
    pub fn reference_tz(&self) -> Result<Tz, ConfigError> {
        self.reference_time_zone
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimeZone {
                name: self.reference_time_zone.clone(),
            })
    }
}

fn default_reference_time_zone() -> String {
    DEFAULT_REFERENCE_TIME_ZONE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zone_parses() {
        let config = ProjectConfig::default();
        assert_eq!(config.reference_tz().unwrap(), chrono_tz::America::Chicago);
    }

    #[test]
    fn test_unknown_zone() {
        let config = ProjectConfig {
            reference_time_zone: "Nowhere/Special".to_string(),
        };
        assert!(config.reference_tz().is_err());
    }
}
