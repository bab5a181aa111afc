//! List command implementation.
//!
//! The `tpudiepie list` command prints every node once, as a table or as
//! the raw gcloud records.

use chrono::Utc;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::report::print_report;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    ctx: CommandContext<'a>,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(ctx: CommandContext<'a>, args: ListArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let count = print_report(
            self.ctx.lookup,
            self.args.zone.as_deref(),
            self.args.format,
            ui,
            Utc::now(),
        )?;
        tracing::debug!("Listed {} TPUs", count);
        Ok(CommandResult::success())
    }
}
