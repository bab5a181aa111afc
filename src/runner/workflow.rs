//! Workflow execution orchestration.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{Result, TpuError};
use crate::shell::CommandExecutor;
use crate::ui::{format_duration, Prompt, UserInterface};

use super::clock::Clock;
use super::step::{Step, StepAction};

/// Notice printed in place of each skipped action during a dry run.
pub const DRY_RUN_NOTICE: &str = "Dry run; command skipped.";

/// Options for running a workflow.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Announce steps without invoking any action.
    pub dry_run: bool,
    /// Skip the plan and confirmation prompt.
    pub auto_confirm: bool,
    /// Pause after each executed step.
    pub step_delay: Duration,
    /// Simulated pause per step in a dry run.
    pub dry_run_delay: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            auto_confirm: false,
            step_delay: Duration::from_secs(1),
            dry_run_delay: Duration::from_secs(3),
        }
    }
}

/// How a workflow run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every step was executed (or simulated).
    Completed,
    /// The operator declined the confirmation prompt; nothing ran.
    Aborted,
}

/// Runs an ordered list of steps.
///
/// Steps execute strictly in order on the calling thread. The first
/// failing step ends the run and nothing after it executes.
pub struct WorkflowRunner<'a> {
    config: &'a RunConfig,
    executor: &'a dyn CommandExecutor,
    clock: &'a dyn Clock,
}

impl<'a> WorkflowRunner<'a> {
    pub fn new(config: &'a RunConfig, executor: &'a dyn CommandExecutor, clock: &'a dyn Clock) -> Self {
        Self {
            config,
            executor,
            clock,
        }
    }

    /// Print every step's label and command without running anything.
    pub fn show_plan(&self, steps: &[Step<'_>], ui: &mut dyn UserInterface) {
        for (i, step) in steps.iter().enumerate() {
            ui.show_step(
                &format!("Step {}: {}.", i + 1, step.label()),
                step.command_text(),
            );
        }
    }

    /// Confirm (unless auto-confirmed) and then execute `steps`.
    pub fn run(&self, steps: Vec<Step<'_>>, ui: &mut dyn UserInterface) -> Result<RunOutcome> {
        if !self.config.auto_confirm {
            self.show_plan(&steps, ui);
            let question = if self.config.dry_run {
                "Proceed? (dry run)"
            } else {
                "Proceed?"
            };
            if !ui.confirm(&Prompt::new("proceed", question))? {
                info!("Workflow declined at confirmation");
                return Ok(RunOutcome::Aborted);
            }
        }

        let total = steps.len();
        for (i, step) in steps.into_iter().enumerate() {
            debug!("Running step {}/{}: {}", i + 1, total, step.label());
            self.run_step(i + 1, step, ui)?;
        }

        Ok(RunOutcome::Completed)
    }

    fn run_step(&self, number: usize, mut step: Step<'_>, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_step(
            &format!("Step {}: {}...", number, step.label()),
            step.command_text(),
        );

        if !step.has_action() {
            return Ok(());
        }

        if self.config.dry_run {
            if step.is_dry_runnable() {
                ui.message(DRY_RUN_NOTICE);
                self.clock.sleep(self.config.dry_run_delay);
            }
            return Ok(());
        }

        let label = step.label().to_string();
        match step.action_mut() {
            StepAction::None => {}
            StepAction::ExternalCommand(command) => {
                let result = self.executor.run(command)?;
                if !result.success {
                    warn!("Step '{}' exited with {:?}", label, result.exit_code);
                    return Err(TpuError::StepFailed {
                        step: label,
                        code: result.exit_code,
                    });
                }
                if ui.output_mode().shows_timings() {
                    ui.message(&format!("  took {}", format_duration(result.duration)));
                }
            }
            StepAction::InProcess(action) => action(&mut *ui)?,
        }

        self.clock.sleep(self.config.step_delay);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::runner::MockClock;
    use crate::shell::MockExecutor;
    use crate::ui::{MockUI, OutputMode};

    fn fast(dry_run: bool, auto_confirm: bool) -> RunConfig {
        RunConfig {
            dry_run,
            auto_confirm,
            step_delay: Duration::from_secs(1),
            dry_run_delay: Duration::from_secs(3),
        }
    }

    #[test]
    fn executes_steps_in_order_with_post_delay() {
        let mut ui = MockUI::new();
        let journal = ui.journal();
        let clock = MockClock::with_journal(journal.clone());
        let executor = MockExecutor::new();
        let config = fast(false, true);
        let runner = WorkflowRunner::new(&config, &executor, &clock);

        let steps = vec![
            Step::command("delete TPU", "gcloud compute tpus delete t1"),
            Step::command("create TPU", "gcloud compute tpus create t1"),
        ];
        let outcome = runner.run(steps, &mut ui).unwrap();

        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(
            executor.commands(),
            vec![
                "gcloud compute tpus delete t1".to_string(),
                "gcloud compute tpus create t1".to_string()
            ]
        );
        assert_eq!(
            journal.entries(),
            vec![
                "step: Step 1: delete TPU...",
                "command: gcloud compute tpus delete t1",
                "sleep: 1s",
                "step: Step 2: create TPU...",
                "command: gcloud compute tpus create t1",
                "sleep: 1s",
            ]
        );
    }

    #[test]
    fn dry_run_never_invokes_actions() {
        let mut ui = MockUI::new();
        let clock = MockClock::new();
        let executor = MockExecutor::new();
        let config = fast(true, true);
        let runner = WorkflowRunner::new(&config, &executor, &clock);
        let called = Cell::new(false);

        let steps = vec![
            Step::command("delete TPU", "gcloud compute tpus delete t1"),
            Step::in_process("wait for TPU to become HEALTHY", |_ui: &mut dyn UserInterface| {
                called.set(true);
                Ok(())
            }),
        ];
        let outcome = runner.run(steps, &mut ui).unwrap();

        assert_eq!(outcome, RunOutcome::Completed);
        assert!(executor.commands().is_empty());
        assert!(!called.get());
        assert!(ui.has_step("Step 1: delete TPU..."));
        assert!(ui.has_step("Step 2: wait for TPU to become HEALTHY..."));
        assert_eq!(
            ui.messages().iter().filter(|m| *m == DRY_RUN_NOTICE).count(),
            2
        );
        assert_eq!(clock.sleeps(), vec![Duration::from_secs(3); 2]);
    }

    #[test]
    fn declined_confirmation_runs_nothing() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("proceed", false);
        let clock = MockClock::new();
        let executor = MockExecutor::new();
        let config = fast(false, false);
        let runner = WorkflowRunner::new(&config, &executor, &clock);
        let called = Cell::new(false);

        let steps = vec![
            Step::command("reimage TPU", "gcloud compute tpus reimage t1"),
            Step::in_process("wait", |_ui: &mut dyn UserInterface| {
                called.set(true);
                Ok(())
            }),
        ];
        let outcome = runner.run(steps, &mut ui).unwrap();

        assert_eq!(outcome, RunOutcome::Aborted);
        assert!(executor.commands().is_empty());
        assert!(!called.get());
        assert!(clock.sleeps().is_empty());
        assert!(ui.has_step("Step 1: reimage TPU."));
        assert!(ui.has_command("tpus reimage t1"));
        assert!(ui.has_step("Step 2: wait."));
    }

    #[test]
    fn plan_precedes_prompt_and_execution() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("proceed", true);
        let journal = ui.journal();
        let clock = MockClock::new();
        let executor = MockExecutor::new();
        let config = fast(false, false);
        let runner = WorkflowRunner::new(&config, &executor, &clock);

        runner
            .run(vec![Step::command("delete TPU", "gcloud x")], &mut ui)
            .unwrap();

        let plan = journal.position("step: Step 1: delete TPU.").unwrap();
        let prompt = journal.position("prompt: proceed").unwrap();
        let exec = journal.position("step: Step 1: delete TPU...").unwrap();
        assert!(plan < prompt && prompt < exec);
    }

    #[test]
    fn dry_run_prompt_says_so() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("proceed", false);
        let clock = MockClock::new();
        let executor = MockExecutor::new();
        let config = fast(true, false);
        let runner = WorkflowRunner::new(&config, &executor, &clock);

        runner.run(vec![Step::command("a", "b")], &mut ui).unwrap();
        assert_eq!(ui.prompts_shown(), &["proceed".to_string()]);
    }

    #[test]
    fn failed_step_stops_the_run() {
        let mut ui = MockUI::new();
        let clock = MockClock::new();
        let executor = MockExecutor::new();
        executor.set_exit_code("gcloud compute tpus delete", 2);
        let config = fast(false, true);
        let runner = WorkflowRunner::new(&config, &executor, &clock);

        let steps = vec![
            Step::command("delete TPU", "gcloud compute tpus delete t1"),
            Step::command("create TPU", "gcloud compute tpus create t1"),
        ];
        let err = runner.run(steps, &mut ui).unwrap_err();

        match err {
            TpuError::StepFailed { step, code } => {
                assert_eq!(step, "delete TPU");
                assert_eq!(code, Some(2));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(executor.commands().len(), 1);
        assert!(!ui.has_step("Step 2: create TPU..."));
    }

    #[test]
    fn in_process_error_propagates() {
        let mut ui = MockUI::new();
        let clock = MockClock::new();
        let executor = MockExecutor::new();
        let config = fast(false, true);
        let runner = WorkflowRunner::new(&config, &executor, &clock);

        let steps = vec![Step::in_process("wait", |_ui: &mut dyn UserInterface| {
            Err(TpuError::WaitTimeout {
                id: "t1".into(),
                waited: Duration::from_secs(60),
            })
        })];
        assert!(matches!(
            runner.run(steps, &mut ui),
            Err(TpuError::WaitTimeout { .. })
        ));
    }

    #[test]
    fn note_steps_only_print() {
        let mut ui = MockUI::new();
        let clock = MockClock::new();
        let executor = MockExecutor::new();
        let config = fast(true, true);
        let runner = WorkflowRunner::new(&config, &executor, &clock);

        runner.run(vec![Step::note("look around")], &mut ui).unwrap();

        assert!(ui.has_step("Step 1: look around..."));
        assert!(ui.messages().is_empty());
        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn verbose_mode_reports_timing() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let clock = MockClock::new();
        let executor = MockExecutor::new();
        let config = fast(false, true);
        let runner = WorkflowRunner::new(&config, &executor, &clock);

        runner.run(vec![Step::command("a", "true")], &mut ui).unwrap();
        assert!(ui.has_message("took"));
    }

    #[test]
    fn quiet_mode_still_shows_plan_before_prompt() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        let journal = ui.journal();
        let clock = MockClock::new();
        let executor = MockExecutor::new();
        let config = fast(false, false);
        let runner = WorkflowRunner::new(&config, &executor, &clock);

        let steps = vec![
            Step::command("delete TPU", "gcloud compute tpus delete t1"),
            Step::command("create TPU", "gcloud compute tpus create t1"),
        ];
        let outcome = runner.run(steps, &mut ui).unwrap();

        assert_eq!(outcome, RunOutcome::Aborted);
        let prompt = journal.position("prompt: proceed").unwrap();
        assert!(journal.position("step: Step 1: delete TPU.").unwrap() < prompt);
        assert!(journal.position("step: Step 2: create TPU.").unwrap() < prompt);
    }
}
