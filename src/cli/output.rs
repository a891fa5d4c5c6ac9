//! Terminal output for the install hook and CLI commands.
//!
//! Status lines carry a `bldr-saucer:` prefix so they stand out in a package
//! manager's install log. Diagnostics go to stderr, everything else to stdout.

use std::borrow::Cow;
use std::io::{self, Write};

/// Prefix for every status and error line.
pub const PREFIX: &str = "bldr-saucer";

/// Writes user-facing messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputManager {
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager. `quiet` suppresses status lines only;
    /// errors and command results are always written.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Prefixed status line on stdout.
    pub fn info(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{PREFIX}: {message}")?;
        stdout.flush()
    }

    /// Diagnostic on stderr, prefixed unless it already names the binary.
    pub fn error(&self, message: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", diagnostic(message))?;
        stderr.flush()
    }

    /// Unprefixed command result on stdout, meant for scripts to consume.
    pub fn result(&self, value: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{value}")?;
        stdout.flush()
    }
}

fn diagnostic(message: &str) -> Cow<'_, str> {
    if message.starts_with(PREFIX) {
        Cow::Borrowed(message)
    } else {
        Cow::Owned(format!("{PREFIX}: {message}"))
    }
}
