//! Reimage command implementation.

use crate::cli::args::ReimageArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::lifecycle::{finish, lifecycle, target};

/// Reimages a node in place and waits for it to become healthy.
pub struct ReimageCommand<'a> {
    ctx: CommandContext<'a>,
    args: ReimageArgs,
}

impl<'a> ReimageCommand<'a> {
    pub fn new(ctx: CommandContext<'a>, args: ReimageArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for ReimageCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = lifecycle(self.ctx, &self.args.target, self.args.wait_timeout)
            .reimage(target(&self.args.target), ui)?;
        Ok(finish(outcome, ui))
    }
}
