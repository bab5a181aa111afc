//! Mock command executor for testing.
//!
//! `MockExecutor` implements [`CommandExecutor`] without touching the
//! operating system. Every command is recorded; captured output and exit
//! codes can be scripted per command prefix.
//!
//! # Example
//!
//! ```
//! use tpudiepie::shell::{CommandExecutor, MockExecutor};
//!
//! let exec = MockExecutor::new();
//! exec.set_output("gcloud compute tpus list", "[]");
//! exec.set_exit_code("gcloud compute tpus delete", 1);
//!
//! assert_eq!(exec.capture("gcloud compute tpus list --zone x").unwrap().stdout, "[]");
//! assert!(!exec.run("gcloud compute tpus delete a").unwrap().success);
//! assert_eq!(exec.commands().len(), 2);
//! ```

use std::cell::RefCell;
use std::time::Duration;

use crate::error::Result;

use super::command::{CommandExecutor, CommandResult};

/// Recording executor with scripted results.
#[derive(Debug, Default)]
pub struct MockExecutor {
    commands: RefCell<Vec<String>>,
    outputs: RefCell<Vec<(String, String)>>,
    exit_codes: RefCell<Vec<(String, i32)>>,
}

impl MockExecutor {
    /// Create an executor where every command succeeds with no output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `stdout` for captured commands starting with `prefix`.
    pub fn set_output(&self, prefix: &str, stdout: &str) {
        self.outputs
            .borrow_mut()
            .push((prefix.to_string(), stdout.to_string()));
    }

    /// Exit with `code` for commands starting with `prefix`.
    pub fn set_exit_code(&self, prefix: &str, code: i32) {
        self.exit_codes
            .borrow_mut()
            .push((prefix.to_string(), code));
    }

    /// All commands seen, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    /// Check if any recorded command contains `needle`.
    pub fn has_command(&self, needle: &str) -> bool {
        self.commands.borrow().iter().any(|c| c.contains(needle))
    }

    fn respond(&self, command: &str, capture: bool) -> CommandResult {
        self.commands.borrow_mut().push(command.to_string());

        let stdout = if capture {
            lookup(&self.outputs.borrow(), command).unwrap_or_default()
        } else {
            String::new()
        };

        match lookup(&self.exit_codes.borrow(), command) {
            Some(code) if code != 0 => {
                CommandResult::failure(Some(code), stdout, String::new(), Duration::ZERO)
            }
            _ => CommandResult::success(stdout, String::new(), Duration::ZERO),
        }
    }
}

/// Latest scripted entry wins.
fn lookup<T: Clone>(entries: &[(String, T)], command: &str) -> Option<T> {
    entries
        .iter()
        .rev()
        .find(|(prefix, _)| command.starts_with(prefix.as_str()))
        .map(|(_, value)| value.clone())
}

impl CommandExecutor for MockExecutor {
    fn run(&self, command: &str) -> Result<CommandResult> {
        Ok(self.respond(command, false))
    }

    fn capture(&self, command: &str) -> Result<CommandResult> {
        Ok(self.respond(command, true))
    }
}
