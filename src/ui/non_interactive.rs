//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::Result;
use crate::tpu::StatusClass;

use super::{parse_answer, OutputMode, Prompt, UserInterface};

/// Environment variable prefix for answering prompts without a terminal.
pub const PROMPT_ENV_PREFIX: &str = "TPUDIEPIE_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Output is plain text. Prompts are answered from
/// `TPUDIEPIE_PROMPT_<KEY>` when set, otherwise with the prompt default,
/// so a workflow that needs confirmation is declined unless pre-approved.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_step(&mut self, label: &str, command: Option<&str>) {
        println!();
        println!("{}", label);
        if let Some(cmd) = command {
            println!("  $ {}", cmd);
        }
    }

    fn show_status_header(&mut self, header: &str) {
        if self.mode.shows_status() {
            println!("{}", header);
        }
    }

    fn show_status(&mut self, line: &str, _class: StatusClass) {
        if self.mode.shows_status() {
            println!("{}", line);
        }
    }

    fn data(&mut self, text: &str) {
        println!("{}", text);
    }

    fn clear(&mut self) {
        // Log-based environments keep the history instead.
        println!();
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .and_then(|v| parse_answer(v))
            .unwrap_or(prompt.default);

        if self.mode.shows_status() {
            println!("{} {}", prompt.question, if answer { "yes" } else { "no" });
        }
        Ok(answer)
    }
}
