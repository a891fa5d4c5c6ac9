//! Core Settings struct and implementations.

use crate::platform::Platform;
use std::path::{Path, PathBuf};

/// Forces resolution (and installation) to use the source-built binary.
pub const FROM_SOURCE_ENV: &str = "BLDR_SAUCER_FROM_SOURCE";

/// Turns the install step into a no-op.
pub const SKIP_BINARY_ENV: &str = "BLDR_SAUCER_SKIP_BINARY";

/// Extra module search directories, as understood by Node.
pub const NODE_PATH_ENV: &str = "NODE_PATH";

/// Default name of the out-of-source build directory under the package root.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Resolved configuration for the resolver and the installer.
///
/// Every environment read happens once, when the settings are built, so the
/// rest of the crate works on plain values.
///
/// # Examples
///
/// ```
/// use bldr_saucer_loader::settings::Settings;
///
/// let settings = Settings::from_lookup("/opt/pkg", |key| match key {
///     "BLDR_SAUCER_FROM_SOURCE" => Some("true".to_string()),
///     _ => None,
/// });
/// assert!(settings.from_source());
/// assert!(!settings.skip_install());
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Directory the package is installed in; the build runs here.
    package_root: PathBuf,

    /// Build directory name, relative to `package_root`.
    build_dir_name: String,

    /// `BLDR_SAUCER_FROM_SOURCE=true`
    from_source: bool,

    /// `BLDR_SAUCER_SKIP_BINARY=true`
    skip_install: bool,

    /// Pinned platform. `None` means detect the host on every call.
    platform: Option<Platform>,

    /// Extra directories searched for platform packages.
    module_paths: Vec<PathBuf>,
}

impl Settings {
    pub(super) fn new(
        package_root: PathBuf,
        build_dir_name: String,
        from_source: bool,
        skip_install: bool,
        platform: Option<Platform>,
        module_paths: Vec<PathBuf>,
    ) -> Self {
        Self {
            package_root,
            build_dir_name,
            from_source,
            skip_install,
            platform,
            module_paths,
        }
    }

    /// Reads flags from the process environment.
    pub fn from_env(package_root: impl Into<PathBuf>) -> Self {
        Self::from_lookup(package_root, |key| std::env::var(key).ok())
    }

    /// Reads flags through `lookup` instead of the process environment.
    ///
    /// A flag counts as set only when its value is exactly `true`.
    pub fn from_lookup<F>(package_root: impl Into<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).is_some_and(|value| value == "true");

        let module_paths: Vec<PathBuf> = lookup(NODE_PATH_ENV)
            .map(|value| {
                std::env::split_paths(&value)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        super::SettingsBuilder::new()
            .package_root(package_root.into())
            .from_source(flag(FROM_SOURCE_ENV))
            .skip_install(flag(SKIP_BINARY_ENV))
            .module_paths(module_paths)
            .build()
    }

    pub fn package_root(&self) -> &Path {
        &self.package_root
    }

    /// Absolute build directory, `<package root>/<build dir name>`.
    pub fn build_dir(&self) -> PathBuf {
        self.package_root.join(&self.build_dir_name)
    }

    /// Build directory as passed to CMake (relative to the package root).
    pub fn build_dir_name(&self) -> &str {
        &self.build_dir_name
    }

    pub fn from_source(&self) -> bool {
        self.from_source
    }

    pub fn skip_install(&self) -> bool {
        self.skip_install
    }

    /// The pinned platform, or the host platform detected right now.
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    pub fn module_paths(&self) -> &[PathBuf] {
        &self.module_paths
    }
}
