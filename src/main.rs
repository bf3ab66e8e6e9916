//! perpetual-update - runs the never-ending update screen in a terminal.
//!
//! Commands are typed as lines on stdin (see `adapters::input`). Logs go to
//! stderr; stdout is the update screen.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use perpetual_update::adapters::{forward_commands, SystemClock, TerminalSink, TokioScheduler};
use perpetual_update::application::{CycleController, CycleRuntime, RuntimeError};
use perpetual_update::config::{AppConfig, ConfigError};
use perpetual_update::domain::rotation::catalog;

const COMMAND_BUFFER: usize = 16;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), RuntimeError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config.log_level);

    let mut sink = TerminalSink::stdout();
    sink.banner();
    info!("{}", catalog::STARTUP_NOTICE);

    let (scheduler, timers) = TokioScheduler::channel();
    let controller = CycleController::new(
        config.timings,
        config.behavior,
        Arc::new(SystemClock),
        Box::new(scheduler),
        Box::new(sink),
    );

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let shutdown_tx = Arc::new(shutdown_tx);

    let input_shutdown = Arc::clone(&shutdown_tx);
    tokio::spawn(async move {
        let result = forward_commands(
            tokio::io::stdin(),
            tokio::io::stdout(),
            command_tx,
            &input_shutdown,
        )
        .await;
        if let Err(e) = result {
            error!(error = %e, "input loop failed");
        }
    });

    let signal_shutdown = Arc::clone(&shutdown_tx);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received");
            let _ = signal_shutdown.send(true);
        }
    });

    let mut controller = CycleRuntime::new(controller, timers)
        .run(command_rx, shutdown_rx)
        .await?;

    debug!(state = %controller.state(), "runtime stopped");
    controller.shutdown();
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
