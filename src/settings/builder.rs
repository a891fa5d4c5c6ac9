//! Builder for constructing Settings.

use super::{DEFAULT_BUILD_DIR, Settings};
use crate::platform::Platform;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```
/// use bldr_saucer_loader::platform::{Arch, Os, Platform};
/// use bldr_saucer_loader::settings::SettingsBuilder;
///
/// let settings = SettingsBuilder::new()
///     .package_root("/opt/pkg")
///     .platform(Platform::new(Os::Linux, Arch::X64))
///     .from_source(true)
///     .build();
///
/// assert_eq!(settings.build_dir(), std::path::Path::new("/opt/pkg/build"));
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    package_root: Option<PathBuf>,
    build_dir_name: Option<String>,
    from_source: bool,
    skip_install: bool,
    platform: Option<Platform>,
    module_paths: Vec<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the package root.
    ///
    /// Default: `.`. Callers outside tests normally pass
    /// [`loader_package_root`](crate::resolver::loader_package_root).
    pub fn package_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.package_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the build directory name under the package root.
    ///
    /// Default: `build`
    pub fn build_dir_name(mut self, name: impl Into<String>) -> Self {
        self.build_dir_name = Some(name.into());
        self
    }

    pub fn from_source(mut self, enabled: bool) -> Self {
        self.from_source = enabled;
        self
    }

    pub fn skip_install(mut self, enabled: bool) -> Self {
        self.skip_install = enabled;
        self
    }

    /// Pins the platform instead of detecting the host.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Sets extra module search directories.
    ///
    /// Default: Empty
    pub fn module_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.module_paths = paths;
        self
    }

    pub fn build(self) -> Settings {
        Settings::new(
            self.package_root.unwrap_or_else(|| PathBuf::from(".")),
            self.build_dir_name
                .unwrap_or_else(|| DEFAULT_BUILD_DIR.to_string()),
            self.from_source,
            self.skip_install,
            self.platform,
            self.module_paths,
        )
    }
}
