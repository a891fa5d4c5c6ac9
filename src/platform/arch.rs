//! CPU architecture types and utilities.

use std::fmt;

/// CPU architecture half of a [`Platform`](super::Platform).
///
/// Names follow the npm convention (`x64`, `arm64`, ...) because the
/// prebuilt packages are published under those names.
///
/// # Examples
///
/// ```
/// use bldr_saucer_loader::platform::Arch;
///
/// assert_eq!(Arch::from_rust("aarch64"), Arch::Arm64);
/// assert_eq!(Arch::X64.to_string(), "x64");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
#[serde(into = "String")]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X64,
    /// AArch64 / ARM64 (64-bit) - Apple Silicon, modern ARM servers
    Arm64,
    /// x86 / i686 (32-bit)
    Ia32,
    /// 32-bit ARM
    Arm,
    /// Anything else, carrying its npm name (`ppc64`, `loong64`, ...) or
    /// the Rust `target_arch` name where npm has none
    Other(&'static str),
}

impl Arch {
    /// Architecture of the running process.
    pub fn current() -> Self {
        Self::from_rust(std::env::consts::ARCH)
    }

    /// Maps a Rust `target_arch` value onto the npm naming.
    pub fn from_rust(arch: &'static str) -> Self {
        match arch {
            "x86_64" => Arch::X64,
            "aarch64" => Arch::Arm64,
            "x86" => Arch::Ia32,
            "arm" => Arch::Arm,
            "powerpc" => Arch::Other("ppc"),
            "powerpc64" => Arch::Other("ppc64"),
            "loongarch64" => Arch::Other("loong64"),
            other => Arch::Other(other),
        }
    }

    /// npm-style architecture name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
            Arch::Ia32 => "ia32",
            Arch::Arm => "arm",
            Arch::Other(name) => name,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Arch> for String {
    fn from(arch: Arch) -> Self {
        arch.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rust_uses_npm_names() {
        assert_eq!(Arch::from_rust("x86").as_str(), "ia32");
        assert_eq!(Arch::from_rust("powerpc").as_str(), "ppc");
        assert_eq!(Arch::from_rust("powerpc64").as_str(), "ppc64");
        assert_eq!(Arch::from_rust("loongarch64").as_str(), "loong64");
        assert_eq!(Arch::from_rust("riscv64").as_str(), "riscv64");
        assert_eq!(Arch::from_rust("s390x").as_str(), "s390x");
    }
}
