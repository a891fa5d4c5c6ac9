//! `install`: the package install hook.

use crate::cli::RuntimeConfig;
use crate::error::{LoaderError, Result};
use crate::install::Installer;

/// Runs the install step and reports fatal failures on stderr.
pub fn execute_install(config: &RuntimeConfig) -> Result<i32> {
    let installer = Installer::host(config.settings().clone());

    match installer.run(config.output()) {
        Ok(outcome) => Ok(outcome.exit_code()),
        Err(LoaderError::Install(e)) => {
            log::debug!("Install failed: {:?}", e);
            config.output().error(&e.to_string())?;
            Ok(e.exit_code())
        }
        Err(e) => Err(e),
    }
}
