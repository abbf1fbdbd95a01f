//! CLI command implementations
//!
//! `init` writes a default config file; `serve` loads the config (or
//! falls back to defaults if no file exists) and runs the HTTP server
//! on a fresh tokio runtime.

use std::fs;
use std::path::Path;

use clap::Parser;

use crate::config::ServerConfig;
use crate::http::HttpServer;
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
    }
}

/// Write a default configuration file
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(
            config_path.display().to_string(),
        ));
    }

    let config = ServerConfig::default();
    let content = serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::Config(e.to_string()))?;
    fs::write(config_path, content).map_err(|e| CliError::Io(e.to_string()))?;

    Logger::info(
        "config_written",
        &[("path", &config_path.display().to_string())],
    );
    Ok(())
}

/// Load configuration and run the server until it exits
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        ServerConfig::load(config_path).map_err(|e| CliError::Config(e.to_string()))?
    } else {
        Logger::warn(
            "config_missing",
            &[("path", &config_path.display().to_string())],
        );
        ServerConfig::default()
    };

    let runtime = tokio::runtime::Runtime::new().map_err(|e| CliError::Boot(e.to_string()))?;
    runtime
        .block_on(HttpServer::new(config).start())
        .map_err(|e| CliError::Boot(e.to_string()))
}
