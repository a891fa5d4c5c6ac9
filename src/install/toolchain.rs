//! External process execution for the source build.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// An external command together with its working directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a finished process exited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStatus {
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
}

impl ProcessStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ProcessStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Command search and execution.
pub trait Toolchain {
    /// Absolute path of `tool` on the command search path, if present.
    ///
    /// Produces no output.
    fn find(&self, tool: &str) -> Option<PathBuf>;

    /// Runs `invocation` to completion with inherited stdio.
    fn run(&self, invocation: &Invocation) -> io::Result<ProcessStatus>;
}

impl<T: Toolchain + ?Sized> Toolchain for &T {
    fn find(&self, tool: &str) -> Option<PathBuf> {
        (**self).find(tool)
    }

    fn run(&self, invocation: &Invocation) -> io::Result<ProcessStatus> {
        (**self).run(invocation)
    }
}

/// The real `PATH` and real processes.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostToolchain;

impl Toolchain for HostToolchain {
    fn find(&self, tool: &str) -> Option<PathBuf> {
        match which::which(tool) {
            Ok(path) => {
                log::debug!("Found {} at: {}", tool, path.display());
                Some(path)
            }
            Err(e) => {
                log::debug!("{} not found in PATH: {}", tool, e);
                None
            }
        }
    }

    fn run(&self, invocation: &Invocation) -> io::Result<ProcessStatus> {
        log::info!("Running `{}` in {}", invocation, invocation.cwd.display());
        // Blocks until the tool exits; no timeout.
        let status = std::process::Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .status()?;
        Ok(status.into())
    }
}
