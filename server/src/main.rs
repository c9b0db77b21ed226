mod move_handler;
mod move_provider;
mod server_config;
mod web_server;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use common::{log, log_error, logger};
use move_provider::MinimaxMoveProvider;
use server_config::{ServerConfig, apply_port_override};
use web_server::{WebServerState, run_web_server};

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured port
    #[arg(long)]
    port: Option<u16>,

    #[arg(long)]
    use_log_prefix: bool,
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log!("Shutdown signal received"),
        Err(e) => log_error!("Failed to listen for Ctrl+C: {}", e),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = server_config::get_config_manager(args.config);
    let (config, load_error) = match config_manager.get_config() {
        Ok(config) => (config, None),
        Err(e) => (ServerConfig::default(), Some(e)),
    };

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Server".to_string()))
    } else {
        config.log_prefix.clone()
    };
    logger::init_logger(prefix);

    if let Some(e) = load_error {
        log_error!("Failed to load config, using defaults: {}", e);
    }

    let config = apply_port_override(config, args.port)?;

    let state = WebServerState {
        move_provider: Arc::new(MinimaxMoveProvider),
    };

    run_web_server(&config, state, shutdown_signal()).await?;

    log!("Server shut down gracefully");

    Ok(())
}
