//! Flow settings resolved from configuration

use std::time::Duration;

use cams_shared::{AppConfig, ConfigError, MapConfig};
use chrono_tz::Tz;

use crate::services::project::REFERENCE_TIME_ZONE;

#[derive(Debug, Clone)]
pub struct FlowSettings {
    /// Length of the resend cooldown in ticks
    pub resend_cooldown_seconds: u32,
    /// Time between cooldown ticks
    pub tick_interval: Duration,
    /// Zone whose calendar bounds project end dates
    pub reference_tz: Tz,
    pub map: MapConfig,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            resend_cooldown_seconds: 30,
            tick_interval: Duration::from_secs(1),
            reference_tz: REFERENCE_TIME_ZONE,
            map: MapConfig::default(),
        }
    }
}

impl FlowSettings {
    /// Resolve settings, parsing the configured time zone
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            resend_cooldown_seconds: config.auth.resend_cooldown_seconds,
            tick_interval: config.auth.tick_interval(),
            reference_tz: config.project.reference_tz()?,
            map: config.map.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config() {
        let settings = FlowSettings::from_config(&AppConfig::development()).unwrap();
        assert_eq!(settings.resend_cooldown_seconds, 30);
        assert_eq!(settings.tick_interval, Duration::from_secs(1));
        assert_eq!(settings.reference_tz, chrono_tz::America::Chicago);
        assert_eq!(settings.map.min_area_points, 3);
    }

    #[test]
    fn test_unknown_zone_rejected() {
        let mut config = AppConfig::development();
        config.project.reference_time_zone = "Mars/Olympus_Mons".to_string();
        assert!(matches!(
            FlowSettings::from_config(&config),
            Err(ConfigError::UnknownTimeZone { .. })
        ));
    }
}
