//! Workflow steps.

use std::fmt;

use crate::error::Result;
use crate::ui::UserInterface;

/// An in-process action, such as waiting for a node to become healthy.
pub type InProcessAction<'a> = Box<dyn FnMut(&mut dyn UserInterface) -> Result<()> + 'a>;

/// What a step does when it runs.
pub enum StepAction<'a> {
    /// Nothing; the step only prints its label.
    None,
    /// Command text handed to the executor. Printed before it runs.
    ExternalCommand(String),
    /// A callable run on the current thread. Never printed.
    InProcess(InProcessAction<'a>),
}

impl fmt::Debug for StepAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::ExternalCommand(cmd) => f.debug_tuple("ExternalCommand").field(cmd).finish(),
            Self::InProcess(_) => write!(f, "InProcess(..)"),
        }
    }
}

/// One unit of a workflow.
#[derive(Debug)]
pub struct Step<'a> {
    label: String,
    action: StepAction<'a>,
    dry_runnable: bool,
}

impl<'a> Step<'a> {
    /// A step that runs `command` through the executor.
    pub fn command(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: StepAction::ExternalCommand(command.into()),
            dry_runnable: true,
        }
    }

    /// A step that calls `action` in-process.
    pub fn in_process(
        label: impl Into<String>,
        action: impl FnMut(&mut dyn UserInterface) -> Result<()> + 'a,
    ) -> Self {
        Self {
            label: label.into(),
            action: StepAction::InProcess(Box::new(action)),
            dry_runnable: true,
        }
    }

    /// A purely informational step.
    pub fn note(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: StepAction::None,
            dry_runnable: false,
        }
    }

    /// The step's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Command text, for external-command steps only.
    pub fn command_text(&self) -> Option<&str> {
        match &self.action {
            StepAction::ExternalCommand(cmd) => Some(cmd),
            _ => None,
        }
    }

    /// Whether the step has any action.
    pub fn has_action(&self) -> bool {
        !matches!(self.action, StepAction::None)
    }

    /// Whether a dry run prints the skip notice and pauses for this step.
    pub fn is_dry_runnable(&self) -> bool {
        self.dry_runnable && self.has_action()
    }

    pub(crate) fn action_mut(&mut self) -> &mut StepAction<'a> {
        &mut self.action
    }
}
