//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Every interaction is also appended
//! to a shared [`Journal`], so ordering across the UI and other test
//! doubles (such as [`MockClock`](crate::runner::MockClock)) can be
//! asserted.
//!
//! # Example
//!
//! ```
//! use tpudiepie::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("proceed", false);
//!
//! assert!(!ui.confirm(&Prompt::new("proceed", "Proceed?")).unwrap());
//! ui.message("Aborted.");
//!
//! assert_eq!(ui.prompts_shown(), &["proceed".to_string()]);
//! assert_eq!(ui.journal().entries().last().unwrap(), "message: Aborted.");
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::error::Result;
use crate::tpu::StatusClass;

use super::{OutputMode, Prompt, UserInterface};

/// Shared, ordered record of test-double events.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    /// Snapshot of all entries.
    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Index of the first entry starting with `prefix`.
    pub fn position(&self, prefix: &str) -> Option<usize> {
        self.0.borrow().iter().position(|e| e.starts_with(prefix))
    }
}

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Unconfigured prompts are answered with their default.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    journal: Journal,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    steps: Vec<(String, Option<String>)>,
    status_headers: Vec<String>,
    status_lines: Vec<(String, StatusClass)>,
    data: Vec<String>,
    clears: usize,
    prompt_responses: HashMap<String, bool>,
    prompt_queues: HashMap<String, VecDeque<bool>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Create a MockUI that records into an existing journal.
    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: bool) {
        self.prompt_responses.insert(key.to_string(), response);
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or the prompt default.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<bool>) {
        self.prompt_queues
            .insert(key.to_string(), responses.into_iter().collect());
    }

    /// The journal this UI records into.
    pub fn journal(&self) -> Journal {
        self.journal.clone()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured steps as (label, command).
    pub fn steps(&self) -> &[(String, Option<String>)] {
        &self.steps
    }

    /// Get all captured status headers.
    pub fn status_headers(&self) -> &[String] {
        &self.status_headers
    }

    /// Get all captured status lines with their class.
    pub fn status_lines(&self) -> &[(String, StatusClass)] {
        &self.status_lines
    }

    /// Get all captured machine-readable output.
    pub fn data(&self) -> &[String] {
        &self.data
    }

    /// Number of screen clears.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a step with exactly this label was shown.
    pub fn has_step(&self, label: &str) -> bool {
        self.steps.iter().any(|(l, _)| l == label)
    }

    /// Check if a step showed a command containing `needle`.
    pub fn has_command(&self, needle: &str) -> bool {
        self.steps
            .iter()
            .any(|(_, c)| c.as_deref().is_some_and(|c| c.contains(needle)))
    }

    /// Clear all captured interactions.
    pub fn clear_captured(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.steps.clear();
        self.status_headers.clear();
        self.status_lines.clear();
        self.data.clear();
        self.clears = 0;
        self.prompts_shown.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.journal.record(format!("message: {}", msg));
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.journal.record(format!("success: {}", msg));
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.journal.record(format!("warning: {}", msg));
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.journal.record(format!("error: {}", msg));
        self.errors.push(msg.to_string());
    }

    fn show_step(&mut self, label: &str, command: Option<&str>) {
        self.journal.record(format!("step: {}", label));
        if let Some(cmd) = command {
            self.journal.record(format!("command: {}", cmd));
        }
        self.steps
            .push((label.to_string(), command.map(String::from)));
    }

    fn show_status_header(&mut self, header: &str) {
        self.journal.record("header");
        self.status_headers.push(header.to_string());
    }

    fn show_status(&mut self, line: &str, class: StatusClass) {
        self.journal.record(format!("status: {}", line));
        self.status_lines.push((line.to_string(), class));
    }

    fn data(&mut self, text: &str) {
        self.journal.record("data");
        self.data.push(text.to_string());
    }

    fn clear(&mut self) {
        self.journal.record("clear");
        self.clears += 1;
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        self.journal.record(format!("prompt: {}", prompt.key));
        self.prompts_shown.push(prompt.key.clone());

        if let Some(answer) = self
            .prompt_queues
            .get_mut(&prompt.key)
            .and_then(|q| q.pop_front())
        {
            return Ok(answer);
        }

        Ok(self
            .prompt_responses
            .get(&prompt.key)
            .copied()
            .unwrap_or(prompt.default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();
        ui.message("Hello");
        ui.success("Done");
        ui.warning("Careful");
        ui.error("Failed");

        assert!(ui.has_message("Hello"));
        assert!(ui.has_success("Done"));
        assert_eq!(ui.warnings(), &["Careful".to_string()]);
        assert!(ui.has_error("Failed"));
    }

    #[test]
    fn mock_ui_records_steps_and_commands() {
        let mut ui = MockUI::new();
        ui.show_step("Step 1: delete TPU...", Some("gcloud compute tpus delete a"));
        ui.show_step("Step 2: wait for TPU to become HEALTHY...", None);

        assert!(ui.has_step("Step 1: delete TPU..."));
        assert!(ui.has_command("tpus delete a"));
        assert_eq!(ui.steps()[1].1, None);
        assert_eq!(
            ui.journal().entries(),
            vec![
                "step: Step 1: delete TPU...",
                "command: gcloud compute tpus delete a",
                "step: Step 2: wait for TPU to become HEALTHY...",
            ]
        );
    }

    #[test]
    fn queued_responses_come_first() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("proceed", true);
        ui.queue_prompt_responses("proceed", vec![false]);
        let prompt = Prompt::new("proceed", "Proceed?");

        assert!(!ui.confirm(&prompt).unwrap());
        assert!(ui.confirm(&prompt).unwrap());
        assert_eq!(ui.prompts_shown().len(), 2);
    }

    #[test]
    fn unconfigured_prompt_uses_default() {
        let mut ui = MockUI::new();
        let prompt = Prompt {
            default: true,
            ..Prompt::new("other", "Other?")
        };
        assert!(ui.confirm(&prompt).unwrap());
    }

    #[test]
    fn shared_journal_sees_external_entries() {
        let journal = Journal::new();
        let mut ui = MockUI::with_journal(journal.clone());
        ui.message("first");
        journal.record("sleep: 1s");
        ui.message("second");

        assert_eq!(journal.position("sleep"), Some(1));
        assert_eq!(journal.entries().len(), 3);
    }

    #[test]
    fn clear_captured_resets_state() {
        let mut ui = MockUI::new();
        ui.message("x");
        ui.clear();
        ui.clear_captured();
        assert!(ui.messages().is_empty());
        assert_eq!(ui.clears(), 0);
    }
}
