//! Loader for the bldr-saucer native binary.
//!
//! This library provides:
//! - Platform detection and the prebuilt package table ([`platform`])
//! - Binary resolution: prebuilt package first, local source build second ([`resolver`])
//! - The install hook that builds from source on request ([`install`])
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod install;
pub mod platform;
pub mod resolver;
pub mod settings;

// Re-export commonly used types
pub use error::{CliError, InstallError, LoaderError, ResolveError, Result};
pub use install::{InstallOutcome, Installer};
pub use platform::Platform;
pub use resolver::BinaryResolver;
pub use settings::Settings;
