//! Watch command implementation (`top` and `tail`).

use std::time::Duration;

use crate::cli::args::WatchArgs;
use crate::error::Result;
use crate::report::watch;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// Redraws the status table until interrupted.
pub struct WatchCommand<'a> {
    ctx: CommandContext<'a>,
    args: WatchArgs,
    frames: Option<usize>,
}

impl<'a> WatchCommand<'a> {
    pub fn new(ctx: CommandContext<'a>, args: WatchArgs) -> Self {
        Self {
            ctx,
            args,
            frames: None,
        }
    }

    /// Stop after `frames` redraws instead of running forever.
    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = Some(frames);
        self
    }

    fn interval(&self) -> Duration {
        self.args
            .interval
            .unwrap_or_else(|| self.ctx.config.watch_interval())
    }
}

impl Command for WatchCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        watch(
            self.ctx.lookup,
            self.args.zone.as_deref(),
            self.interval(),
            self.ctx.clock,
            ui,
            self.frames,
        )?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TpuConfig;
    use crate::runner::MockClock;
    use crate::shell::MockExecutor;
    use crate::tpu::SequenceLookup;
    use crate::ui::MockUI;

    #[test]
    fn uses_config_interval_by_default() {
        let config = TpuConfig::default();
        let lookup = SequenceLookup::fixed(vec![]);
        let executor = MockExecutor::new();
        let clock = MockClock::new();
        let ctx = CommandContext {
            config: &config,
            lookup: &lookup,
            executor: &executor,
            clock: &clock,
        };
        let mut ui = MockUI::new();

        WatchCommand::new(ctx, WatchArgs::default())
            .with_frames(3)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.clears(), 3);
        assert_eq!(clock.sleeps(), vec![Duration::from_secs(5); 2]);
    }

    #[test]
    fn interval_flag_overrides_config() {
        let config = TpuConfig::default();
        let lookup = SequenceLookup::fixed(vec![]);
        let executor = MockExecutor::new();
        let clock = MockClock::new();
        let ctx = CommandContext {
            config: &config,
            lookup: &lookup,
            executor: &executor,
            clock: &clock,
        };
        let args = WatchArgs {
            interval: Some(Duration::from_millis(500)),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        WatchCommand::new(ctx, args)
            .with_frames(2)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(clock.sleeps(), vec![Duration::from_millis(500)]);
    }
}
