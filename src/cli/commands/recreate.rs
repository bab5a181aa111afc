//! Recreate command implementation.
//!
//! `tpudiepie recreate --preempted` is meant to run from cron: it only acts
//! when the node has been preempted and is a successful no-op otherwise.

use crate::cli::args::RecreateArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::lifecycle::{finish, lifecycle, target};

/// The recreate command implementation.
pub struct RecreateCommand<'a> {
    ctx: CommandContext<'a>,
    args: RecreateArgs,
}

impl<'a> RecreateCommand<'a> {
    /// Create a new recreate command.
    pub fn new(ctx: CommandContext<'a>, args: RecreateArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for RecreateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = lifecycle(self.ctx, &self.args.target, self.args.wait_timeout).recreate(
            target(&self.args.target),
            self.args.preempted,
            ui,
        )?;
        Ok(finish(outcome, ui))
    }
}
