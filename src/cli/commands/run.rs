//! `run`: launch the resolved binary.

use crate::cli::RuntimeConfig;
use crate::error::{CliError, FAILURE_EXIT_CODE, Result};
use crate::resolver::BinaryResolver;
use std::ffi::OsString;
use std::process::Command;

/// Executes the binary with `args` and inherited stdio, returning its exit
/// code. A child killed by a signal counts as a failure.
pub fn execute_run(config: &RuntimeConfig, args: &[OsString]) -> Result<i32> {
    let resolver = BinaryResolver::host(config.settings().clone());
    let target = match resolver.binary_path() {
        Ok(path) => path,
        Err(e) => {
            config.output().error(&e.to_string())?;
            return Ok(FAILURE_EXIT_CODE);
        }
    };

    log::debug!("Executing {} with {} argument(s)", target.display(), args.len());
    let status = Command::new(&target)
        .args(args)
        .status()
        .map_err(|e| CliError::ExecutionFailed {
            command: target.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(status.code().unwrap_or(FAILURE_EXIT_CODE))
}
