//! `path` and `check`: expose the resolver to scripts.

use crate::cli::RuntimeConfig;
use crate::error::{FAILURE_EXIT_CODE, Result};
use crate::resolver::BinaryResolver;

/// Prints the resolved binary path, or the resolution diagnostic.
pub fn execute_path(config: &RuntimeConfig) -> Result<i32> {
    let resolver = BinaryResolver::host(config.settings().clone());

    match resolver.binary_path() {
        Ok(path) => {
            config.output().result(&path.display().to_string())?;
            Ok(0)
        }
        Err(e) => {
            config.output().error(&e.to_string())?;
            Ok(FAILURE_EXIT_CODE)
        }
    }
}

/// Prints `true` or `false`; the exit code carries the same answer.
pub fn execute_check(config: &RuntimeConfig) -> Result<i32> {
    let available = BinaryResolver::host(config.settings().clone()).has_binary();
    config.output().result(&available.to_string())?;
    Ok(if available { 0 } else { FAILURE_EXIT_CODE })
}
