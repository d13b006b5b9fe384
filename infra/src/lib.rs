//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the CAMS flows call
//! through. The account backend and the imagery provider are not available
//! to the client yet, so both are in-process services that enforce the
//! same rules a real backend would and keep everything in memory.
//!
//! ## Architecture
//!
//! - **Account**: registration, reset codes and password changes
//! - **Imagery**: satellite imagery job submission

use std::sync::Arc;

use cams_core::{Clock, SystemClock};
use cams_shared::AppConfig;

pub mod account;
pub mod imagery;

pub use account::StubAccountService;
pub use imagery::{StubImageryService, SubmittedJob};

/// Configuration module for infrastructure services
pub mod config {
    //! Settings for the in-process services, derived from [`AppConfig`]

    use chrono::Duration;

    use cams_shared::AppConfig;

    /// Default lifetime of an issued reset code
    pub const DEFAULT_CODE_TTL_MINUTES: i64 = 10;

    /// Account service settings
    #[derive(Debug, Clone)]
    pub struct StubAccountConfig {
        /// Digits in an issued reset code
        pub code_length: usize,
        /// How long a reset code stays valid
        pub code_ttl: Duration,
        /// Log issued codes (development only)
        pub log_codes: bool,
    }

    impl Default for StubAccountConfig {
        fn default() -> Self {
            Self {
                code_length: 6,
                code_ttl: Duration::minutes(DEFAULT_CODE_TTL_MINUTES),
                log_codes: false,
            }
        }
    }

    /// Imagery service settings
    #[derive(Debug, Clone)]
    pub struct StubImageryConfig {
        /// Provider key; requests are refused without one
        pub api_key: Option<String>,
        /// Smallest accepted outline
        pub min_area_points: usize,
        /// Cap on submitted jobs, unlimited when `None`
        pub max_jobs: Option<usize>,
    }

    impl Default for StubImageryConfig {
        fn default() -> Self {
            Self {
                api_key: Some("development".to_string()),
                min_area_points: 3,
                max_jobs: None,
            }
        }
    }

    /// Infrastructure configuration settings
    #[derive(Debug, Clone, Default)]
    pub struct InfrastructureConfig {
        pub account: StubAccountConfig,
        pub imagery: StubImageryConfig,
    }

    impl InfrastructureConfig {
        /// Build from application configuration and the environment.
        ///
        /// `CAMS_IMAGERY_API_KEY` provides the imagery key; debug
        /// environments fall back to a development key.
        pub fn from_app_config(config: &AppConfig) -> Self {
            let api_key = std::env::var("CAMS_IMAGERY_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .or_else(|| {
                    config
                        .environment
                        .is_debug()
                        .then(|| "development".to_string())
                });
            let max_jobs = std::env::var("CAMS_IMAGERY_MAX_JOBS")
                .ok()
                .and_then(|v| v.parse().ok());

            Self {
                account: StubAccountConfig {
                    code_length: config.auth.verification_code_length,
                    code_ttl: Duration::minutes(DEFAULT_CODE_TTL_MINUTES),
                    log_codes: config.environment.is_debug(),
                },
                imagery: StubImageryConfig {
                    api_key,
                    min_area_points: config.map.min_area_points,
                    max_jobs,
                },
            }
        }
    }
}

/// Infrastructure service container
#[derive(Clone)]
pub struct InfrastructureServices {
    pub account: Arc<StubAccountService>,
    pub imagery: Arc<StubImageryService>,
}

impl InfrastructureServices {
    /// Create services from explicit settings and a clock
    pub fn new(config: config::InfrastructureConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            account: Arc::new(StubAccountService::new(config.account, clock.clone())),
            imagery: Arc::new(StubImageryService::new(config.imagery, clock)),
        }
    }
}

/// Initialize infrastructure services
///
/// Validates the application configuration and builds the account and
/// imagery services on the system clock.
pub fn initialize(app_config: &AppConfig) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!(
        environment = %app_config.environment,
        "Initializing infrastructure services..."
    );

    app_config
        .validate()
        .map_err(|e| InfrastructureError::Config(e.to_string()))?;

    let config = config::InfrastructureConfig::from_app_config(app_config);
    if config.account.code_length == 0 {
        return Err(InfrastructureError::Config(
            "verification code length must be positive".to_string(),
        ));
    }
    if config.imagery.api_key.is_none() {
        tracing::warn!("No imagery API key configured; imagery requests will be refused");
    }

    tracing::info!("Infrastructure services initialized successfully");

    Ok(InfrastructureServices::new(config, Arc::new(SystemClock)))
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
