//! Error types for resolving, building, and launching the native binary.
//!
//! Resolution failures and install failures are kept apart because callers
//! recover from them differently: a [`ResolveError`] can be fixed by opting
//! into a source build, while an [`InstallError`] ends the install step.

use crate::platform::Platform;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Exit code reported for every fatal install or CLI failure.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Main error type for all loader operations
#[derive(Error, Debug)]
pub enum LoaderError {
    /// No usable binary
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Install step failed
    #[error(transparent)]
    Install(#[from] InstallError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The primary resolution entry point found nothing to run.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(
        "bldr-saucer binary not found for platform {platform}. \
         Try running with BLDR_SAUCER_FROM_SOURCE=true to build from source."
    )]
    BinaryNotFound { platform: Platform },
}

/// Fatal failures of the install step.
///
/// The messages are user-facing and printed as-is on stderr.
#[derive(Error, Debug)]
pub enum InstallError {
    /// A required build tool is not on the command search path
    #[error("{tool} is required but not found")]
    MissingTool { tool: &'static str },

    /// The build directory could not be created
    #[error("failed to create build directory {}: {source}", .path.display())]
    CreateBuildDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A build tool could not be started at all
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// CMake configure exited unsuccessfully
    #[error("CMake configure failed{}", describe_code(.code))]
    ConfigureFailed { code: Option<i32> },

    /// CMake build exited unsuccessfully
    #[error("CMake build failed{}", describe_code(.code))]
    BuildFailed { code: Option<i32> },

    /// The build reported success but produced no binary
    #[error("Binary not found at {}", .path.display())]
    ArtifactMissing { path: PathBuf },
}

impl InstallError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {code})"),
        None => " (terminated by signal)".to_string(),
    }
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// The package directory could not be turned into an absolute path
    #[error("Invalid package directory {}: {reason}", .path.display())]
    InvalidPackageDir {
        /// Directory as given
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl LoaderError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoaderError::Install(e) => e.exit_code(),
            _ => FAILURE_EXIT_CODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Arch, Os};

    #[test]
    fn test_not_found_mentions_platform_and_hint() {
        let err = ResolveError::BinaryNotFound {
            platform: Platform::new(Os::Other("freebsd"), Arch::X64),
        };
        let msg = err.to_string();
        assert!(msg.contains("freebsd-x64"));
        assert!(msg.contains("BLDR_SAUCER_FROM_SOURCE=true"));
    }

    #[test]
    fn test_install_messages() {
        assert_eq!(
            InstallError::MissingTool { tool: "ninja" }.to_string(),
            "ninja is required but not found"
        );
        assert_eq!(
            InstallError::ConfigureFailed { code: Some(2) }.to_string(),
            "CMake configure failed (exit code 2)"
        );
        assert_eq!(
            InstallError::BuildFailed { code: None }.to_string(),
            "CMake build failed (terminated by signal)"
        );
    }

    #[test]
    fn test_exit_codes_are_failure() {
        let err: LoaderError = InstallError::MissingTool { tool: "cmake" }.into();
        assert_eq!(err.exit_code(), 1);
        let err: LoaderError = ResolveError::BinaryNotFound {
            platform: Platform::current(),
        }
        .into();
        assert_eq!(err.exit_code(), 1);
    }
}
