//! Install step orchestration.
//!
//! This module provides the [`Installer`] that runs once when the package is
//! installed. It only builds from source when a prebuilt binary is missing
//! *and* the user opted in; every other path is a successful no-op.

use super::tool_detection::{CMAKE, first_missing_tool};
use super::{HostToolchain, Invocation, Toolchain};
use crate::cli::OutputManager;
use crate::error::{InstallError, Result};
use crate::resolver::{BinaryResolver, Filesystem, HostFs, NodeModuleLocator, PackageLocator};
use crate::settings::{FROM_SOURCE_ENV, SKIP_BINARY_ENV, Settings};
use std::fmt;
use std::path::PathBuf;

/// What a successful install step did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    /// `BLDR_SAUCER_SKIP_BINARY=true`; nothing was touched
    Skipped,
    /// A platform package already provides the binary
    Prebuilt(PathBuf),
    /// No prebuilt binary and no opt-in to build from source
    SourceBuildNotRequested,
    /// Built from source at the given path
    Built(PathBuf),
}

impl InstallOutcome {
    /// Process exit code for this outcome. Always success.
    pub fn exit_code(&self) -> i32 {
        0
    }
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallOutcome::Skipped => {
                write!(f, "Skipping install ({SKIP_BINARY_ENV}=true)")
            }
            InstallOutcome::Prebuilt(_) => f.write_str("Using prebuilt binary"),
            InstallOutcome::SourceBuildNotRequested => write!(
                f,
                "No prebuilt binary for this platform. \
                 Set {FROM_SOURCE_ENV}=true to build from source."
            ),
            InstallOutcome::Built(_) => f.write_str("Build successful!"),
        }
    }
}

/// One-shot install procedure.
///
/// # Examples
///
/// ```no_run
/// use bldr_saucer_loader::cli::OutputManager;
/// use bldr_saucer_loader::install::Installer;
/// use bldr_saucer_loader::settings::Settings;
///
/// # fn example() -> bldr_saucer_loader::Result<()> {
/// let installer = Installer::host(Settings::from_env("."));
/// let outcome = installer.run(&OutputManager::new(false))?;
/// std::process::exit(outcome.exit_code());
/// # }
/// ```
pub struct Installer<F = HostFs, L = NodeModuleLocator, T = HostToolchain> {
    resolver: BinaryResolver<F, L>,
    toolchain: T,
}

impl Installer {
    /// Installer backed by the real filesystem, package lookup, and `PATH`.
    pub fn host(settings: Settings) -> Self {
        Self::new(BinaryResolver::host(settings), HostToolchain)
    }
}

impl<F, L, T> Installer<F, L, T>
where
    F: Filesystem,
    L: PackageLocator,
    T: Toolchain,
{
    pub fn new(resolver: BinaryResolver<F, L>, toolchain: T) -> Self {
        Self {
            resolver,
            toolchain,
        }
    }

    pub fn resolver(&self) -> &BinaryResolver<F, L> {
        &self.resolver
    }

    /// Runs the install step.
    ///
    /// Returns `Ok` for every intentional no-op as well as a successful
    /// build. Every `Err` is fatal and maps to exit code 1.
    pub fn run(&self, out: &OutputManager) -> Result<InstallOutcome> {
        let settings = self.resolver.settings();

        if settings.skip_install() {
            return self.finish(out, InstallOutcome::Skipped);
        }

        if let Some(prebuilt) = self
            .resolver
            .platform_binary_path()
            .filter(|path| self.resolver.fs().exists(path))
        {
            return self.finish(out, InstallOutcome::Prebuilt(prebuilt));
        }

        if !settings.from_source() {
            return self.finish(out, InstallOutcome::SourceBuildNotRequested);
        }

        out.info("Building from source...")?;
        let binary = self.build_from_source(out)?;
        self.finish(out, InstallOutcome::Built(binary))
    }

    fn finish(&self, out: &OutputManager, outcome: InstallOutcome) -> Result<InstallOutcome> {
        log::debug!("Install outcome: {:?}", outcome);
        out.info(&outcome.to_string())?;
        Ok(outcome)
    }

    fn build_from_source(&self, out: &OutputManager) -> Result<PathBuf> {
        let settings = self.resolver.settings();
        let fs = self.resolver.fs();

        if let Some(tool) = first_missing_tool(&self.toolchain) {
            return Err(InstallError::MissingTool { tool }.into());
        }

        let build_dir = settings.build_dir();
        if !fs.exists(&build_dir) {
            fs.create_dir_all(&build_dir)
                .map_err(|source| InstallError::CreateBuildDir {
                    path: build_dir.clone(),
                    source,
                })?;
        }

        let root = settings.package_root();
        let build_dir_name = settings.build_dir_name();

        out.info("Configuring...")?;
        let configure = Invocation::new(CMAKE, ["-G", "Ninja", "-B", build_dir_name], root);
        let status = self.spawn(&configure)?;
        if !status.success() {
            return Err(InstallError::ConfigureFailed { code: status.code }.into());
        }

        out.info("Building...")?;
        let build = Invocation::new(CMAKE, ["--build", build_dir_name], root);
        let status = self.spawn(&build)?;
        if !status.success() {
            return Err(InstallError::BuildFailed { code: status.code }.into());
        }

        let binary = self.resolver.source_binary_path();
        if !fs.exists(&binary) {
            return Err(InstallError::ArtifactMissing { path: binary }.into());
        }

        Ok(binary)
    }

    fn spawn(&self, invocation: &Invocation) -> Result<super::ProcessStatus> {
        self.toolchain.run(invocation).map_err(|source| {
            InstallError::Spawn {
                command: invocation.to_string(),
                source,
            }
            .into()
        })
    }
}
