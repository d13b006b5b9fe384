//! Shared utilities and common types for the CAMS client
//!
//! This crate provides functionality used by every other crate in the workspace:
//! - Configuration types loaded from the environment
//! - Pure field validators (email, password strength)
//! - Error codes used to look up inline advisory messages
//! - Geographic types for map selection

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthFlowConfig, Environment, LogFormat, LoggingConfig, MapConfig, ProjectConfig,
};
pub use errors::{error_codes, ConfigError};
pub use types::{Coordinate, CoordinateSpan, MapRegion};
pub use utils::{email, validation};
