//! Subprocess execution.
//!
//! Commands are spawned directly (no intermediate shell), so package
//! references are passed to the package manager verbatim.

use crate::error::{Result, ToolpinError};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A program, its arguments and extra environment for the child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Program to run, resolved by the OS against `PATH`.
    pub program: String,

    /// Arguments, passed without shell interpretation.
    pub args: Vec<String>,

    /// Environment variables merged over the parent's, for this child only.
    pub env: BTreeMap<String, OsString>,
}

impl Invocation {
    /// Create an invocation with no arguments.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            ..Default::default()
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set an environment variable for the child.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> ToolpinError {
        ToolpinError::Spawn {
            command: self.to_string(),
            source,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.env {
            write!(f, "{}={} ", key, value.to_string_lossy())?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of running a command to completion.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty when streamed).
    pub stdout: String,

    /// Standard error (empty when streamed).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Runs subprocesses on behalf of the installer.
///
/// The installer only ever talks to this trait, so tests can substitute a
/// fake that records invocations instead of spawning anything.
pub trait CommandRunner {
    /// Run to completion with stdout and stderr captured.
    fn run_silent(&self, invocation: &Invocation) -> Result<CommandResult>;

    /// Run to completion with stdout and stderr inherited from this process.
    fn run_verbose(&self, invocation: &Invocation) -> Result<CommandResult>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run_silent(&self, invocation: &Invocation) -> Result<CommandResult> {
        (**self).run_silent(invocation)
    }

    fn run_verbose(&self, invocation: &Invocation) -> Result<CommandResult> {
        (**self).run_verbose(invocation)
    }
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run_silent(&self, invocation: &Invocation) -> Result<CommandResult> {
        tracing::debug!("Running (silent): {}", invocation);
        let start = Instant::now();

        let output = invocation
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                tracing::debug!("Failed to spawn {}: {}", invocation.program, e);
                invocation.spawn_error(e)
            })?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }

    fn run_verbose(&self, invocation: &Invocation) -> Result<CommandResult> {
        tracing::debug!("Running (verbose): {}", invocation);
        let start = Instant::now();

        let status = invocation
            .to_command()
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                tracing::debug!("Failed to spawn {}: {}", invocation.program, e);
                invocation.spawn_error(e)
            })?;

        let duration = start.elapsed();

        if status.success() {
            Ok(CommandResult::success(String::new(), String::new(), duration))
        } else {
            Ok(CommandResult::failure(
                status.code(),
                String::new(),
                String::new(),
                duration,
            ))
        }
    }
}
