//! Account and password-reset flow configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Settings for the forgot-password flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthFlowConfig {
    /// Seconds the "Resend Code" action stays disabled after a send
    #[serde(default = "default_resend_cooldown")]
    pub resend_cooldown_seconds: u32,

    /// Cadence of cooldown ticks in milliseconds
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,

    /// Number of digits in issued reset codes
    #[serde(default = "default_code_length")]
    pub verification_code_length: usize,
}

impl Default for AuthFlowConfig {
    fn default() -> Self {
        Self {
            resend_cooldown_seconds: default_resend_cooldown(),
            tick_interval_ms: default_tick_interval(),
            verification_code_length: default_code_length(),
        }
    }
}

impl AuthFlowConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let resend_cooldown_seconds = std::env::var("CAMS_RESEND_COOLDOWN_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_resend_cooldown);
        let tick_interval_ms = std::env::var("CAMS_TICK_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_tick_interval);
        let verification_code_length = std::env::var("CAMS_VERIFICATION_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_code_length);

        Self {
            resend_cooldown_seconds,
            tick_interval_ms,
            verification_code_length,
        }
    }

    /// Tick cadence as a `Duration`
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resend_cooldown_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "resend_cooldown_seconds".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "tick_interval_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if !(4..=10).contains(&self.verification_code_length) {
            return Err(ConfigError::InvalidValue {
                key: "verification_code_length".to_string(),
                message: "must be between 4 and 10".to_string(),
            });
        }
        Ok(())
    }
}

fn default_resend_cooldown() -> u32 {
    30
}

fn default_tick_interval() -> u64 {
    1000
}

fn default_code_length() -> usize {
    6
}
