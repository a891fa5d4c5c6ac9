//! Command execution functions.
//!
//! Each command returns the process exit code. Expected failures (no binary,
//! failed build) are reported here and turned into exit codes; only
//! unexpected errors propagate to `main`.

mod info;
mod install;
mod resolve;
mod run;

pub use info::{InfoReport, execute_info};
pub use install::execute_install;
pub use resolve::{execute_check, execute_path};
pub use run::execute_run;
