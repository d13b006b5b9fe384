//! # CAMS App
//!
//! Composition root for the CAMS client: loads configuration, initialises
//! logging, wires the flow controller to its collaborators and exposes a
//! line-driven shell over the flows.

pub mod config;
pub mod error;
pub mod i18n;
pub mod shell;
pub mod telemetry;

pub use error::AppError;
pub use shell::{Command, Shell};
