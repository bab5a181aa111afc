//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;
use crate::tpu::StatusClass;

use super::{
    prompt_confirm, should_use_colors, NonInteractiveUI, OutputMode, Prompt, TpuTheme,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: TpuTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            TpuTheme::new()
        } else {
            TpuTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_step(&mut self, label: &str, command: Option<&str>) {
        writeln!(self.term).ok();
        writeln!(self.term, "{}", self.theme.highlight.apply_to(label)).ok();
        if let Some(cmd) = command {
            writeln!(self.term, "{}", self.theme.format_command(cmd)).ok();
        }
    }

    fn show_status_header(&mut self, header: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.highlight.apply_to(header)).ok();
        }
    }

    fn show_status(&mut self, line: &str, class: StatusClass) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_status(line, class)).ok();
        }
    }

    fn data(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }

    fn clear(&mut self) {
        self.term.clear_screen().ok();
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        prompt_confirm(prompt, &self.term)
    }
}

/// Create the appropriate UI based on interactivity.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_keeps_mode() {
        let ui = TerminalUI::new(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn create_ui_non_interactive() {
        let ui = create_ui(false, OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
