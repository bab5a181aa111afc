//! Shell command execution.

use crate::error::{Result, TpuError};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
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

/// Runs command text against the operating system.
///
/// Workflow steps go through [`run`](CommandExecutor::run) so the operator
/// sees the external tool's own output; lookups go through
/// [`capture`](CommandExecutor::capture) to parse it.
pub trait CommandExecutor {
    /// Run with inherited stdio.
    fn run(&self, command: &str) -> Result<CommandResult>;

    /// Run with stdout and stderr captured.
    fn capture(&self, command: &str) -> Result<CommandResult>;
}

/// Executes commands through the system shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn run(&self, command: &str) -> Result<CommandResult> {
        execute(command, false)
    }

    fn capture(&self, command: &str) -> Result<CommandResult> {
        execute(command, true)
    }
}

/// Execute a shell command, optionally capturing its output.
///
/// A non-zero exit is reported in the returned [`CommandResult`]; only a
/// failure to start the shell is an error.
pub fn execute(command: &str, capture: bool) -> Result<CommandResult> {
    let start = Instant::now();

    let (shell, flag) = shell_invocation();
    let mut cmd = Command::new(shell);
    cmd.arg(flag);
    cmd.arg(command);

    if capture {
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    }

    tracing::debug!(capture, "Executing: {}", command);

    let output = cmd.output().map_err(|e| {
        tracing::warn!("Failed to spawn shell for '{}': {}", command, e);
        TpuError::CommandFailed {
            command: command.to_string(),
            message: e.to_string(),
        }
    })?;

    let duration = start.elapsed();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        code = ?output.status.code(),
        "Finished in {:?}: {}",
        duration,
        command
    );

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

/// Shell and flag used to interpret command text.
fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("/bin/sh", "-c")
    }
}
