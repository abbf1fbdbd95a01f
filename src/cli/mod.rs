//! CLI module for campusd
//!
//! - init: write a default configuration file
//! - serve: boot the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use errors::{CliError, CliResult};
