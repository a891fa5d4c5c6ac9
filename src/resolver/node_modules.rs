//! Node-style package lookup.
//!
//! Mirrors how Node resolves `<package>/package.json`: walk from the
//! starting directory up to the filesystem root, checking
//! `<dir>/node_modules/<package>` at each level, then fall back to the
//! `NODE_PATH` directories.

use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Manifest file that marks a package directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Finds the directory an npm package is installed in.
pub trait PackageLocator {
    /// Directory containing `package`'s `package.json`, if installed.
    fn locate(&self, package: &str) -> Option<PathBuf>;
}

/// Locates packages the way Node's module resolution does.
#[derive(Clone, Debug)]
pub struct NodeModuleLocator {
    base: PathBuf,
    module_paths: Vec<PathBuf>,
}

impl NodeModuleLocator {
    /// Searches upward from `base`, then through `module_paths` in order.
    pub fn new(base: impl Into<PathBuf>, module_paths: Vec<PathBuf>) -> Self {
        Self {
            base: base.into(),
            module_paths,
        }
    }

    fn candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.base
            .ancestors()
            // Node never looks in node_modules/node_modules.
            .filter(|dir| dir.file_name().is_none_or(|name| name != "node_modules"))
            .map(|dir| dir.join("node_modules"))
            .chain(self.module_paths.iter().cloned())
    }
}

impl PackageLocator for NodeModuleLocator {
    fn locate(&self, package: &str) -> Option<PathBuf> {
        for modules_dir in self.candidates() {
            let package_dir = join_package(&modules_dir, package);
            if package_dir.join(MANIFEST_FILE).is_file() {
                log::debug!("Located {} at {}", package, package_dir.display());
                return Some(package_dir);
            }
        }
        log::debug!("Package {} is not installed", package);
        None
    }
}

impl<L: PackageLocator + ?Sized> PackageLocator for &L {
    fn locate(&self, package: &str) -> Option<PathBuf> {
        (**self).locate(package)
    }
}

/// Joins a possibly scoped package name (`@scope/name`) component-wise.
fn join_package(modules_dir: &Path, package: &str) -> PathBuf {
    package
        .split('/')
        .fold(modules_dir.to_path_buf(), |dir, part| dir.join(part))
}

/// Nearest directory at or above `start` that holds a `package.json`.
pub fn enclosing_package(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(MANIFEST_FILE).is_file())
        .map(Path::to_path_buf)
}

/// Package directory of the running loader executable.
///
/// The executable path is canonicalized first, so a launch through a
/// `node_modules/.bin` symlink lands in the real package. Falls back to the
/// executable's own directory when no `package.json` encloses it.
pub fn loader_package_root() -> Result<PathBuf> {
    let exe = std::fs::canonicalize(std::env::current_exe()?)?;
    let exe_dir = exe.parent().unwrap_or(exe.as_path()).to_path_buf();
    let root = enclosing_package(&exe_dir).unwrap_or(exe_dir);
    log::debug!("Loader package root: {}", root.display());
    Ok(root)
}

/// The fields of `package.json` this crate reports on.
#[derive(Clone, Debug, Default, Deserialize, serde::Serialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Reads `<package_dir>/package.json`.
pub fn read_manifest(package_dir: &Path) -> Result<PackageManifest> {
    let contents = std::fs::read_to_string(package_dir.join(MANIFEST_FILE))?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PACKAGE: &str = "@aptre/bldr-saucer-linux-x64";

    fn install_package(modules_dir: &Path, package: &str, manifest: &str) -> PathBuf {
        let dir = join_package(modules_dir, package);
        fs::create_dir_all(&dir).expect("create package dir");
        fs::write(dir.join(MANIFEST_FILE), manifest).expect("write package.json");
        dir
    }

    #[test]
    fn test_locates_package_in_own_node_modules() {
        let temp = TempDir::new().expect("tempdir");
        let installed = install_package(&temp.path().join("node_modules"), PACKAGE, "{}");

        let locator = NodeModuleLocator::new(temp.path(), vec![]);
        assert_eq!(locator.locate(PACKAGE), Some(installed));
    }

    #[test]
    fn test_locates_hoisted_package_in_ancestor() {
        // node_modules/@aptre/bldr-saucer is the loader, the platform
        // package is hoisted next to it.
        let temp = TempDir::new().expect("tempdir");
        let modules = temp.path().join("node_modules");
        let loader_dir = modules.join("@aptre").join("bldr-saucer");
        fs::create_dir_all(&loader_dir).expect("create loader dir");
        let installed = install_package(&modules, PACKAGE, "{}");

        let locator = NodeModuleLocator::new(&loader_dir, vec![]);
        assert_eq!(locator.locate(PACKAGE), Some(installed));
    }

    #[test]
    fn test_falls_back_to_module_paths() {
        let temp = TempDir::new().expect("tempdir");
        let global = temp.path().join("global");
        let installed = install_package(&global, PACKAGE, "{}");
        let base = temp.path().join("project");
        fs::create_dir_all(&base).expect("create project dir");

        let locator = NodeModuleLocator::new(&base, vec![global]);
        assert_eq!(locator.locate(PACKAGE), Some(installed));
    }

    #[test]
    fn test_directory_without_manifest_is_not_a_package() {
        let temp = TempDir::new().expect("tempdir");
        let dir = join_package(&temp.path().join("node_modules"), PACKAGE);
        fs::create_dir_all(dir.join("bin")).expect("create dir");

        let locator = NodeModuleLocator::new(temp.path(), vec![]);
        assert_eq!(locator.locate(PACKAGE), None);
    }

    #[test]
    fn test_enclosing_package_climbs_to_manifest() {
        let temp = TempDir::new().expect("tempdir");
        let package = temp.path().join("pkg");
        let bin = package.join("bin");
        fs::create_dir_all(&bin).expect("create bin dir");
        fs::write(package.join(MANIFEST_FILE), "{}").expect("write package.json");

        assert_eq!(enclosing_package(&bin), Some(package.clone()));
        assert_eq!(enclosing_package(&package), Some(package));
    }

    #[test]
    fn test_enclosing_package_ignores_manifest_directories() {
        let temp = TempDir::new().expect("tempdir");
        let outer = temp.path().join("outer");
        let inner = outer.join("inner");
        fs::create_dir_all(inner.join(MANIFEST_FILE)).expect("create dir named package.json");
        fs::write(outer.join(MANIFEST_FILE), "{}").expect("write package.json");

        assert_eq!(enclosing_package(&inner), Some(outer));
    }

    #[test]
    fn test_loader_package_root_is_absolute() {
        let root = loader_package_root().expect("package root");
        assert!(root.is_absolute());
        assert!(root.is_dir());
    }

    #[test]
    fn test_read_manifest() {
        let temp = TempDir::new().expect("tempdir");
        let dir = install_package(
            temp.path(),
            "pkg",
            r#"{"name": "pkg", "version": "1.2.3", "os": ["linux"]}"#,
        );

        let manifest = read_manifest(&dir).expect("manifest");
        assert_eq!(manifest.name.as_deref(), Some("pkg"));
        assert_eq!(manifest.version.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_read_manifest_rejects_invalid_json() {
        let temp = TempDir::new().expect("tempdir");
        let dir = install_package(temp.path(), "pkg", "not json");
        assert!(read_manifest(&dir).is_err());
    }
}
