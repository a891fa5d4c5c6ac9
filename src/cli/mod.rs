//! Command line interface for the loader.
//!
//! This module parses arguments, builds the [`RuntimeConfig`], and dispatches
//! to the command implementations.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, RuntimeConfig};
pub use output::{OutputManager, PREFIX};

use crate::error::Result;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    run_with(&args)
}

/// Executes already-parsed arguments.
pub fn run_with(args: &Args) -> Result<i32> {
    let config = RuntimeConfig::from_args(args)?;

    match &args.command {
        Command::Install => commands::execute_install(&config),
        Command::Path => commands::execute_path(&config),
        Command::Check => commands::execute_check(&config),
        Command::Run { args } => commands::execute_run(&config, args),
        Command::Info => commands::execute_info(&config),
    }
}
