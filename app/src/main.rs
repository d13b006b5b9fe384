use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;

use cams_app::config::load_config;
use cams_app::telemetry::init_tracing;
use cams_app::Shell;
use cams_core::{FlowController, FlowSettings, SystemClock};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting CAMS shell"
    );

    let services = cams_infra::initialize(&config)?;
    let settings = FlowSettings::from_config(&config)?;
    let (controller, ticks) = FlowController::new(
        services.account.clone(),
        services.imagery.clone(),
        Arc::new(SystemClock),
        settings,
    );

    let mut shell = Shell::new(controller);
    shell
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), ticks)
        .await?;

    info!("CAMS shell stopped");
    Ok(())
}
