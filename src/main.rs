//! bldr_saucer_loader - installer and launcher for the bldr-saucer binary.
//!
//! Runs as the package's install hook (`install`) and as a launcher
//! (`path`, `check`, `run`, `info`).

use bldr_saucer_loader::cli;
use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            let code = e.exit_code();
            let report = anyhow::Error::new(e).context("bldr_saucer_loader failed");
            eprintln!("{}: {:#}", cli::PREFIX, report);
            code
        }
    };

    process::exit(exit_code);
}
