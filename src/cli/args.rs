//! Command line argument parsing.
//!
//! This module provides CLI argument parsing using clap and the
//! [`RuntimeConfig`] every command runs with.

use crate::error::{CliError, Result};
use crate::resolver::loader_package_root;
use crate::settings::Settings;
use clap::{Parser, Subcommand};
use path_absolutize::Absolutize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Installer and launcher for the bldr-saucer native binary
#[derive(Parser, Debug)]
#[command(
    name = "bldr_saucer_loader",
    version,
    about = "Installer and launcher for the bldr-saucer native binary",
    long_about = "Finds the bldr-saucer binary for this platform, either from a prebuilt
platform package or from a local source build, and optionally builds it.

Usage:
  bldr_saucer_loader install
  BLDR_SAUCER_FROM_SOURCE=true bldr_saucer_loader install
  bldr_saucer_loader path
  bldr_saucer_loader run -- --help

Environment:
  BLDR_SAUCER_FROM_SOURCE=true   always use (and build) the source binary
  BLDR_SAUCER_SKIP_BINARY=true   make `install` a no-op"
)]
pub struct Args {
    /// Package directory (where `build/` lives and `node_modules` lookup starts)
    ///
    /// Defaults to the package the loader executable is installed in, found
    /// by following symlinks and climbing to the nearest `package.json`.
    #[arg(
        long,
        global = true,
        env = "BLDR_SAUCER_PACKAGE_DIR",
        value_name = "DIR"
    )]
    pub package_dir: Option<PathBuf>,

    /// Suppress status messages (errors are still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Use a prebuilt binary, or build from source when opted in
    Install,

    /// Print the path of the binary to execute
    Path,

    /// Print whether a usable binary exists; exit 1 if not
    Check,

    /// Execute the binary, forwarding all remaining arguments
    Run {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },

    /// Print resolution details as JSON
    Info,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments and the environment
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    settings: Settings,
    output: super::OutputManager,
}

impl RuntimeConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let package_root = match &args.package_dir {
            Some(dir) => absolutize(dir)?,
            None => loader_package_root()?,
        };
        log::debug!("Package root: {}", package_root.display());

        Ok(Self {
            settings: Settings::from_env(package_root),
            output: super::OutputManager::new(args.quiet),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}

fn absolutize(dir: &Path) -> Result<PathBuf> {
    let absolute = dir.absolutize().map_err(|e| CliError::InvalidPackageDir {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(absolute.into_owned())
}
