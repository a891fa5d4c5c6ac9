//! Prebuilt-or-source binary resolution.

use super::{Filesystem, HostFs, NodeModuleLocator, PackageLocator};
use crate::error::ResolveError;
use crate::platform::Platform;
use crate::settings::Settings;
use std::path::PathBuf;

/// Directory inside a platform package that holds the executable.
const PACKAGE_BIN_DIR: &str = "bin";

/// Resolves the path of the `bldr-saucer` executable.
///
/// Nothing is cached: every call re-reads the platform and the filesystem.
///
/// # Resolution order
///
/// 1. `BLDR_SAUCER_FROM_SOURCE=true` returns the source-built path as-is.
/// 2. The prebuilt binary from the platform package, if it exists.
/// 3. The source-built binary, if it exists.
///
/// # Examples
///
/// ```no_run
/// use bldr_saucer_loader::resolver::{BinaryResolver, loader_package_root};
/// use bldr_saucer_loader::settings::Settings;
///
/// # fn main() -> bldr_saucer_loader::Result<()> {
/// let resolver = BinaryResolver::host(Settings::from_env(loader_package_root()?));
/// match resolver.binary_path() {
///     Ok(path) => println!("{}", path.display()),
///     Err(e) => eprintln!("{e}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct BinaryResolver<F = HostFs, L = NodeModuleLocator> {
    settings: Settings,
    fs: F,
    locator: L,
}

impl BinaryResolver {
    /// Resolver backed by the real filesystem and Node-style package lookup
    /// rooted at the package directory.
    pub fn host(settings: Settings) -> Self {
        let locator = NodeModuleLocator::new(
            settings.package_root(),
            settings.module_paths().to_vec(),
        );
        Self::new(settings, HostFs, locator)
    }
}

impl<F, L> BinaryResolver<F, L>
where
    F: Filesystem,
    L: PackageLocator,
{
    pub fn new(settings: Settings, fs: F, locator: L) -> Self {
        Self {
            settings,
            fs,
            locator,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    pub fn platform(&self) -> Platform {
        self.settings.platform()
    }

    /// Path of the prebuilt binary shipped by this platform's package.
    ///
    /// `None` when the platform has no package or the package is not
    /// installed. The returned file may still be missing.
    pub fn platform_binary_path(&self) -> Option<PathBuf> {
        let platform = self.platform();
        let Some(package) = platform.package_name() else {
            log::debug!("No prebuilt package for {}", platform);
            return None;
        };

        let package_dir = self.locator.locate(package)?;
        Some(
            package_dir
                .join(PACKAGE_BIN_DIR)
                .join(platform.binary_file_name()),
        )
    }

    /// Path the source build produces, whether or not it exists.
    pub fn source_binary_path(&self) -> PathBuf {
        self.settings
            .build_dir()
            .join(self.platform().binary_file_name())
    }

    /// Primary entry point: the binary to execute.
    pub fn binary_path(&self) -> Result<PathBuf, ResolveError> {
        if self.settings.from_source() {
            // Not checked for existence; whoever runs it reports the failure.
            return Ok(self.source_binary_path());
        }

        if let Some(path) = self
            .platform_binary_path()
            .filter(|path| self.fs.exists(path))
        {
            log::debug!("Using prebuilt binary {}", path.display());
            return Ok(path);
        }

        let source = self.source_binary_path();
        if self.fs.exists(&source) {
            log::debug!("Using source-built binary {}", source.display());
            return Ok(source);
        }

        Err(ResolveError::BinaryNotFound {
            platform: self.platform(),
        })
    }

    /// Whether [`binary_path`](Self::binary_path) would succeed.
    pub fn has_binary(&self) -> bool {
        self.binary_path().is_ok()
    }
}
