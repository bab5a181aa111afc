//! Visual theme and styling.

use console::Style;

use crate::tpu::StatusClass;

/// Terminal styles for tpudiepie output.
#[derive(Debug, Clone)]
pub struct TpuTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for step labels and table headers (bold).
    pub highlight: Style,
    /// Style for command text (blue bold).
    pub command: Style,
    /// Style for the `$` prompt before commands (dim).
    pub dim: Style,
    /// READY and HEALTHY nodes (green).
    pub nominal: Style,
    /// PREEMPTED nodes (red).
    pub critical: Style,
    /// Nodes in any other state (yellow).
    pub transitional: Style,
}

impl Default for TpuTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TpuTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            highlight: Style::new().bold(),
            command: Style::new().blue().bold(),
            dim: Style::new().dim(),
            nominal: Style::new().green(),
            critical: Style::new().red(),
            transitional: Style::new().yellow(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            highlight: Style::new(),
            command: Style::new(),
            dim: Style::new(),
            nominal: Style::new(),
            critical: Style::new(),
            transitional: Style::new(),
        }
    }

    /// Style for a status line of the given class.
    pub fn status_style(&self, class: StatusClass) -> &Style {
        match class {
            StatusClass::Nominal => &self.nominal,
            StatusClass::Critical => &self.critical,
            StatusClass::Transitional => &self.transitional,
        }
    }

    /// Format a status line.
    pub fn format_status(&self, line: &str, class: StatusClass) -> String {
        format!("{}", self.status_style(class).apply_to(line))
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a command line as `  $ <command>`.
    pub fn format_command(&self, command: &str) -> String {
        format!("  {} {}", self.dim.apply_to("$"), self.command.apply_to(command))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_status_is_unstyled() {
        let theme = TpuTheme::plain();
        assert_eq!(
            theme.format_status("zone id READY", StatusClass::Critical),
            "zone id READY"
        );
    }

    #[test]
    fn theme_formats_command() {
        let theme = TpuTheme::plain();
        assert_eq!(theme.format_command("gcloud version"), "  $ gcloud version");
    }

    #[test]
    fn theme_formats_success() {
        let theme = TpuTheme::plain();
        let msg = theme.format_success("Complete");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Complete"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = TpuTheme::plain();
        assert!(theme.format_warning("Caution").contains("⚠ Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = TpuTheme::plain();
        assert!(theme.format_error("Failed").contains("✗ Failed"));
    }

    #[test]
    fn status_style_per_class() {
        let theme = TpuTheme::new();
        for class in [
            StatusClass::Nominal,
            StatusClass::Critical,
            StatusClass::Transitional,
        ] {
            let _ = theme.status_style(class).apply_to("line");
        }
    }

    #[test]
    fn default_impl_matches_new() {
        let default = TpuTheme::default();
        let new = TpuTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
