//! Install step: use a prebuilt binary or build one from source.
//!
//! # Overview
//!
//! The installer:
//! 1. Honors `BLDR_SAUCER_SKIP_BINARY`
//! 2. Accepts an installed platform package as-is
//! 3. Builds with CMake + Ninja only when `BLDR_SAUCER_FROM_SOURCE` is set
//! 4. Verifies the built binary exists
//!
//! # Module Organization
//!
//! - [`orchestrator`] - [`Installer`] and [`InstallOutcome`]
//! - [`tool_detection`] - required build tool checks
//! - [`toolchain`] - [`Toolchain`] seam over `PATH` lookup and process execution

mod orchestrator;
mod tool_detection;
mod toolchain;

pub use orchestrator::{InstallOutcome, Installer};
pub use tool_detection::{CMAKE, NINJA, REQUIRED_TOOLS, first_missing_tool};
pub use toolchain::{HostToolchain, Invocation, ProcessStatus, Toolchain};
