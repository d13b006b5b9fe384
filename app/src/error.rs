//! Application-level errors

use cams_infra::InfrastructureError;
use cams_shared::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Failed to initialise logging: {0}")]
    Telemetry(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
