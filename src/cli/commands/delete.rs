//! Delete command implementation.
//!
//! The `tpudiepie delete` command deletes one node after showing its
//! current status, then prints the command that would re-create it.

use crate::cli::args::DeleteArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::lifecycle::{finish, lifecycle, target};

/// The delete command implementation.
pub struct DeleteCommand<'a> {
    ctx: CommandContext<'a>,
    args: DeleteArgs,
}

impl<'a> DeleteCommand<'a> {
    /// Create a new delete command.
    pub fn new(ctx: CommandContext<'a>, args: DeleteArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for DeleteCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = lifecycle(self.ctx, &self.args.target, None)
            .delete(target(&self.args.target), ui)?;
        Ok(finish(outcome, ui))
    }
}
