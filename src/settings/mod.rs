//! Configuration for resolving and installing the native binary.
//!
//! Environment variables are read in exactly one place,
//! [`Settings::from_env`]. Everything downstream takes a [`Settings`] value,
//! which keeps tests independent of the real process environment.

mod builder;
mod core;

pub use builder::SettingsBuilder;
pub use self::core::{DEFAULT_BUILD_DIR, FROM_SOURCE_ENV, NODE_PATH_ENV, SKIP_BINARY_ENV, Settings};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Arch, Os, Platform};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_flags_default_off() {
        let settings = Settings::from_lookup("/pkg", lookup(&[]));
        assert!(!settings.from_source());
        assert!(!settings.skip_install());
        assert!(settings.module_paths().is_empty());
    }

    #[test]
    fn test_flags_require_exact_true() {
        for value in ["1", "TRUE", "yes", " true", ""] {
            let settings = Settings::from_lookup(
                "/pkg",
                lookup(&[(FROM_SOURCE_ENV, value), (SKIP_BINARY_ENV, value)]),
            );
            assert!(!settings.from_source(), "{value:?}");
            assert!(!settings.skip_install(), "{value:?}");
        }

        let settings = Settings::from_lookup(
            "/pkg",
            lookup(&[(FROM_SOURCE_ENV, "true"), (SKIP_BINARY_ENV, "true")]),
        );
        assert!(settings.from_source());
        assert!(settings.skip_install());
    }

    #[test]
    fn test_node_path_is_split() {
        let joined = std::env::join_paths([Path::new("/a/modules"), Path::new("/b/modules")])
            .expect("join paths")
            .into_string()
            .expect("utf-8");
        let settings = Settings::from_lookup("/pkg", lookup(&[(NODE_PATH_ENV, &joined)]));
        assert_eq!(
            settings.module_paths(),
            &[PathBuf::from("/a/modules"), PathBuf::from("/b/modules")]
        );
    }

    #[test]
    fn test_builder_defaults() {
        let settings = SettingsBuilder::new().build();
        assert_eq!(settings.package_root(), Path::new("."));
        assert_eq!(settings.build_dir_name(), DEFAULT_BUILD_DIR);
        assert_eq!(settings.platform(), Platform::current());
    }

    #[test]
    fn test_builder_pins_platform_and_build_dir() {
        let pinned = Platform::new(Os::Win32, Arch::X64);
        let settings = SettingsBuilder::new()
            .package_root("/pkg")
            .build_dir_name("out")
            .platform(pinned)
            .build();
        assert_eq!(settings.platform(), pinned);
        assert_eq!(settings.build_dir(), Path::new("/pkg").join("out"));
    }
}
