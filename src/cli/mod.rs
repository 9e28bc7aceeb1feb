//! CLI module for the trivia service
//!
//! Provides command-line interface for:
//! - serve: Seed the store and run the HTTP server
//! - check-config: Validate a config file and print the resolved config

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check_config, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
