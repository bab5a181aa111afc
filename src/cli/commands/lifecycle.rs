//! Wiring shared by the delete, reimage and recreate commands.

use std::time::Duration;

use crate::cli::args::TargetArgs;
use crate::runner::{Lifecycle, LifecycleOutcome, RunConfig, Target, WaitPolicy};
use crate::tpu::CommandBuilder;
use crate::ui::UserInterface;

use super::dispatcher::{CommandContext, CommandResult};

/// Build a [`Lifecycle`] from config plus per-invocation flags.
pub fn lifecycle<'a>(
    ctx: CommandContext<'a>,
    target: &TargetArgs,
    wait_timeout: Option<Duration>,
) -> Lifecycle<'a> {
    let run = RunConfig {
        dry_run: target.dry_run,
        auto_confirm: target.yes,
        step_delay: ctx.config.step_delay(),
        dry_run_delay: ctx.config.dry_run_delay(),
    };
    let wait = WaitPolicy {
        interval: ctx.config.poll_interval(),
        timeout: wait_timeout.or_else(|| ctx.config.wait_timeout()),
    };

    Lifecycle::new(
        ctx.lookup,
        ctx.executor,
        ctx.clock,
        CommandBuilder::from_config(ctx.config),
        run,
        wait,
    )
}

/// The node named on the command line.
pub fn target(args: &TargetArgs) -> Target<'_> {
    Target {
        id: &args.tpu,
        zone: args.zone.as_deref(),
        version: args.tpu_version.as_deref(),
    }
}

/// Map a workflow outcome to an exit status.
pub fn finish(outcome: LifecycleOutcome, ui: &mut dyn UserInterface) -> CommandResult {
    match outcome {
        LifecycleOutcome::Completed | LifecycleOutcome::Skipped => CommandResult::success(),
        LifecycleOutcome::Aborted => {
            ui.warning("Aborted; no changes were made.");
            CommandResult::aborted()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn aborted_maps_to_exit_three() {
        let mut ui = MockUI::new();
        let result = finish(LifecycleOutcome::Aborted, &mut ui);
        assert_eq!(result.exit_code, 3);
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn skipped_is_success() {
        let mut ui = MockUI::new();
        assert_eq!(finish(LifecycleOutcome::Skipped, &mut ui), CommandResult::success());
    }

    #[test]
    fn target_borrows_args() {
        let args = TargetArgs {
            tpu: "t1".into(),
            zone: Some("us-central1-f".into()),
            ..Default::default()
        };
        let t = target(&args);
        assert_eq!(t.id, "t1");
        assert_eq!(t.zone, Some("us-central1-f"));
        assert_eq!(t.version, None);
    }
}
