//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use tpudiepie::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_step("Step 1: delete TPU...", Some("gcloud compute tpus delete t1"));
//! ui.message("Dry run; command skipped.");
//!
//! assert!(ui.has_step("Step 1: delete TPU..."));
//! assert!(ui.has_message("Dry run"));
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::{Journal, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::{format_duration, OutputMode};
pub use prompts::prompt_confirm;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, TpuTheme};

use crate::error::Result;
use crate::tpu::StatusClass;

/// Trait for user interface interactions.
///
/// Verbosity is fixed when the UI is constructed; implementations decide
/// what to show from their own [`OutputMode`].
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Show a step label and, for command steps, the command text.
    /// Always shown, so a quiet run still lists what it will do.
    fn show_step(&mut self, label: &str, command: Option<&str>);

    /// Show the status table header.
    fn show_status_header(&mut self, header: &str);

    /// Show one status line styled by its class.
    fn show_status(&mut self, line: &str, class: StatusClass);

    /// Emit machine-readable output verbatim. Always shown.
    fn data(&mut self, text: &str);

    /// Clear the screen.
    fn clear(&mut self);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;
}

/// A yes/no question.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for env overrides and test lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer used when the user just presses enter.
    pub default: bool,
}

impl Prompt {
    /// Create a prompt that defaults to "no".
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            default: false,
        }
    }
}

/// Parse a textual yes/no answer.
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}
