//! CLI argument definitions using clap
//!
//! Commands:
//! - campusd init --config <path>
//! - campusd serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// campusd - A self-hostable college management backend
#[derive(Parser, Debug)]
#[command(name = "campusd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./campusd.json")]
        config: PathBuf,
    },

    /// Start the campusd server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./campusd.json")]
        config: PathBuf,
    },
}
