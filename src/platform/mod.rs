//! Platform identification and the prebuilt package table.
//!
//! A [`Platform`] is the `(os, arch)` pair of the host. It is looked up in a
//! fixed table to find the npm package that ships a prebuilt `bldr-saucer`
//! for that platform. Platforms outside the table have no prebuilt package
//! and can only use a binary built from source.

mod arch;
mod os;

pub use arch::Arch;
pub use os::Os;

use std::fmt;

/// Base name of the native executable, without any platform suffix.
pub const BINARY_NAME: &str = "bldr-saucer";

/// Platforms with a published prebuilt package.
const PACKAGES: [(Os, Arch, &str); 5] = [
    (Os::Darwin, Arch::Arm64, "@aptre/bldr-saucer-darwin-arm64"),
    (Os::Darwin, Arch::X64, "@aptre/bldr-saucer-darwin-x64"),
    (Os::Linux, Arch::X64, "@aptre/bldr-saucer-linux-x64"),
    (Os::Linux, Arch::Arm64, "@aptre/bldr-saucer-linux-arm64"),
    (Os::Win32, Arch::X64, "@aptre/bldr-saucer-win32-x64"),
];

/// Host platform identifier.
///
/// Displays as `<os>-<arch>`, e.g. `linux-x64`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Platform of the running process.
    pub fn current() -> Self {
        Self::new(Os::current(), Arch::current())
    }

    /// Name of the npm package carrying a prebuilt binary for this platform.
    ///
    /// Returns `None` for unsupported platforms.
    pub fn package_name(&self) -> Option<&'static str> {
        PACKAGES
            .iter()
            .find(|(os, arch, _)| *os == self.os && *arch == self.arch)
            .map(|(_, _, name)| *name)
    }

    /// File name of the executable on this platform (`.exe` on Windows).
    pub fn binary_file_name(&self) -> String {
        if self.os.is_windows() {
            format!("{BINARY_NAME}.exe")
        } else {
            BINARY_NAME.to_string()
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
