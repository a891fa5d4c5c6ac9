//! `info`: JSON dump of everything the resolver looks at.

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::platform::Platform;
use crate::resolver::{
    BinaryResolver, Filesystem, PackageLocator, PackageManifest, read_manifest,
};
use serde::Serialize;
use std::path::PathBuf;

/// Snapshot of a resolution attempt.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub platform: Platform,
    /// Mapped prebuilt package, `null` for unsupported platforms
    pub package: Option<&'static str>,
    /// Installed package directory, if found
    pub package_dir: Option<PathBuf>,
    /// `package.json` of the installed package, if readable
    pub package_manifest: Option<PackageManifest>,
    pub platform_binary: Option<BinaryState>,
    pub source_binary: BinaryState,
    pub from_source: bool,
    pub skip_install: bool,
    pub resolved: Option<PathBuf>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BinaryState {
    pub path: PathBuf,
    pub exists: bool,
}

impl InfoReport {
    pub fn collect<F, L>(resolver: &BinaryResolver<F, L>) -> Self
    where
        F: Filesystem,
        L: PackageLocator,
    {
        let platform = resolver.platform();
        let package = platform.package_name();
        let package_dir = package.and_then(|name| resolver.locator().locate(name));
        let package_manifest = package_dir.as_deref().and_then(|dir| {
            read_manifest(dir)
                .inspect_err(|e| log::warn!("Unreadable manifest in {}: {}", dir.display(), e))
                .ok()
        });

        let state = |path: PathBuf| BinaryState {
            exists: resolver.fs().exists(&path),
            path,
        };

        let (resolved, error) = match resolver.binary_path() {
            Ok(path) => (Some(path), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            platform,
            package,
            package_dir,
            package_manifest,
            platform_binary: resolver.platform_binary_path().map(state),
            source_binary: state(resolver.source_binary_path()),
            from_source: resolver.settings().from_source(),
            skip_install: resolver.settings().skip_install(),
            resolved,
            error,
        }
    }
}

/// Prints an [`InfoReport`] as pretty JSON. Always succeeds with exit code 0.
pub fn execute_info(config: &RuntimeConfig) -> Result<i32> {
    let resolver = BinaryResolver::host(config.settings().clone());
    let report = InfoReport::collect(&resolver);
    config
        .output()
        .result(&serde_json::to_string_pretty(&report)?)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Arch, Os};
    use crate::resolver::fakes::{FakeFs, FakeLocator};
    use crate::settings::SettingsBuilder;

    #[test]
    fn test_report_for_unsupported_platform() {
        let fs = FakeFs::default();
        let locator = FakeLocator::default();
        let settings = SettingsBuilder::new()
            .package_root("/pkg")
            .platform(Platform::new(Os::Other("freebsd"), Arch::X64))
            .build();
        let resolver = BinaryResolver::new(settings, &fs, &locator);

        let report = InfoReport::collect(&resolver);

        assert_eq!(report.package, None);
        assert!(report.platform_binary.is_none());
        assert!(!report.source_binary.exists);
        assert!(report.resolved.is_none());
        assert!(report.error.as_deref().is_some_and(|e| e.contains("freebsd-x64")));

        let json = serde_json::to_value(&report).expect("serializes");
        assert_eq!(json["platform"]["os"], "freebsd");
        assert_eq!(json["platform"]["arch"], "x64");
        assert!(json["package"].is_null());
    }

    #[test]
    fn test_report_for_resolved_source_binary() {
        let fs = FakeFs::with_files(["/pkg/build/bldr-saucer"]);
        let locator = FakeLocator::default();
        let settings = SettingsBuilder::new()
            .package_root("/pkg")
            .platform(Platform::new(Os::Linux, Arch::Arm64))
            .build();
        let resolver = BinaryResolver::new(settings, &fs, &locator);

        let report = InfoReport::collect(&resolver);

        assert_eq!(report.package, Some("@aptre/bldr-saucer-linux-arm64"));
        assert!(report.package_dir.is_none());
        assert!(report.source_binary.exists);
        assert_eq!(report.resolved, Some(PathBuf::from("/pkg/build/bldr-saucer")));
        assert!(report.error.is_none());
    }
}
