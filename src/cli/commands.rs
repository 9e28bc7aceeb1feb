//! CLI command implementations
//!
//! `serve` resolves the config, seeds the store and runs the HTTP server
//! on a tokio runtime. `check-config` validates a config file and prints
//! the resolved result.

use std::path::Path;

use crate::http_server::{ServerConfig, TriviaServer};
use crate::observability::{log_event_with_fields, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Resolve the server config: file (or defaults), then the port override
pub fn resolve_config(config_path: Option<&Path>, port: Option<u16>) -> CliResult<ServerConfig> {
    let mut config = match config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(port) = port {
        config.port = port;
    }

    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            (
                "source",
                &config_path
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "defaults".to_string()),
            ),
            ("addr", &config.socket_addr()),
        ],
    );

    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = resolve_config(config_path, port)?;

    let server = TriviaServer::from_config(config).map_err(|e| {
        log_event_with_fields(Event::ServerFailed, &[("reason", &e.to_string())]);
        CliError::from(e)
    })?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            log_event_with_fields(Event::ServerFailed, &[("reason", &e.to_string())]);
            CliError::serve_failed(format!("HTTP server failed: {}", e))
        })
    })?;

    Ok(())
}

/// Validate a config file and print it with defaults filled in
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = ServerConfig::load(config_path)?;
    write_json(&config)
}
