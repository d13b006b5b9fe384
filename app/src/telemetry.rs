//! Tracing subscriber setup

use cams_shared::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` overrides the configured level. Logs go to stderr so they
/// never interleave with shell output on stdout.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AppError::Telemetry(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    result.map_err(|e| AppError::Telemetry(e.to_string()))
}
