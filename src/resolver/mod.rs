//! Binary resolution.
//!
//! # Module Organization
//!
//! - [`binary`] - [`BinaryResolver`], the prebuilt-then-source lookup
//! - [`fs`] - [`Filesystem`] seam over existence checks and directory creation
//! - [`node_modules`] - [`PackageLocator`] seam and Node-style package lookup

mod binary;
mod fs;
mod node_modules;

pub use binary::BinaryResolver;
pub use fs::{Filesystem, HostFs};
pub use node_modules::{
    MANIFEST_FILE, NodeModuleLocator, PackageLocator, PackageManifest, enclosing_package,
    loader_package_root, read_manifest,
};

#[cfg(test)]
pub(crate) mod fakes {
    use super::{Filesystem, PackageLocator};
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use std::io;
    use std::path::{Path, PathBuf};

    /// In-memory filesystem that records directory creation.
    #[derive(Default)]
    pub struct FakeFs {
        pub files: RefCell<HashSet<PathBuf>>,
        pub created_dirs: RefCell<Vec<PathBuf>>,
        pub exists_calls: RefCell<usize>,
    }

    impl FakeFs {
        pub fn with_files<I, P>(paths: I) -> Self
        where
            I: IntoIterator<Item = P>,
            P: Into<PathBuf>,
        {
            let fs = Self::default();
            fs.files.borrow_mut().extend(paths.into_iter().map(Into::into));
            fs
        }

        pub fn add(&self, path: impl Into<PathBuf>) {
            self.files.borrow_mut().insert(path.into());
        }
    }

    impl Filesystem for FakeFs {
        fn exists(&self, path: &Path) -> bool {
            *self.exists_calls.borrow_mut() += 1;
            self.files.borrow().contains(path)
        }

        fn create_dir_all(&self, path: &Path) -> io::Result<()> {
            self.created_dirs.borrow_mut().push(path.to_path_buf());
            self.add(path);
            Ok(())
        }
    }

    /// Package lookup backed by a fixed map.
    #[derive(Default)]
    pub struct FakeLocator {
        pub packages: HashMap<String, PathBuf>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeLocator {
        pub fn with(package: &str, dir: impl Into<PathBuf>) -> Self {
            let mut locator = Self::default();
            locator.packages.insert(package.to_string(), dir.into());
            locator
        }
    }

    impl PackageLocator for FakeLocator {
        fn locate(&self, package: &str) -> Option<PathBuf> {
            self.calls.borrow_mut().push(package.to_string());
            self.packages.get(package).cloned()
        }
    }
}
