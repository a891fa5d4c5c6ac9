//! Operating system half of the platform identifier.

use std::fmt;

/// Host operating system, named the way npm names `process.platform`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
#[serde(into = "String")]
pub enum Os {
    Darwin,
    Linux,
    Win32,
    /// Anything else, carrying its npm name (`sunos`, `freebsd`, ...) or
    /// the Rust `target_os` name where npm has none
    Other(&'static str),
}

impl Os {
    /// Operating system of the running process.
    pub fn current() -> Self {
        Self::from_rust(std::env::consts::OS)
    }

    /// Maps a Rust `target_os` value onto the npm naming.
    pub fn from_rust(os: &'static str) -> Self {
        match os {
            "macos" => Os::Darwin,
            "linux" => Os::Linux,
            "windows" => Os::Win32,
            // Node reports every Solaris derivative as `sunos`.
            "solaris" | "illumos" => Os::Other("sunos"),
            other => Os::Other(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Darwin => "darwin",
            Os::Linux => "linux",
            Os::Win32 => "win32",
            Os::Other(name) => name,
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Os::Win32)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Os> for String {
    fn from(os: Os) -> Self {
        os.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rust_uses_npm_names() {
        assert_eq!(Os::from_rust("macos"), Os::Darwin);
        assert_eq!(Os::from_rust("windows"), Os::Win32);
        assert_eq!(Os::from_rust("illumos").as_str(), "sunos");
        assert_eq!(Os::from_rust("solaris").as_str(), "sunos");
        assert_eq!(Os::from_rust("freebsd").as_str(), "freebsd");
        assert_eq!(Os::from_rust("android").as_str(), "android");
    }
}
