//! Named TPU workflows: delete, reimage and recreate.
//!
//! Each workflow resolves the node once up front, builds its steps from
//! that snapshot, and hands them to the [`WorkflowRunner`]. The health
//! poll step re-reads the node on every attempt.

use chrono::Utc;
use tracing::info;

use crate::error::Result;
use crate::shell::CommandExecutor;
use crate::tpu::{format_headers, format_line, CommandBuilder, Tpu, TpuLookup};
use crate::ui::UserInterface;

use super::clock::Clock;
use super::health::{wait_until_healthy, WaitPolicy};
use super::step::Step;
use super::workflow::{RunConfig, RunOutcome, WorkflowRunner};

/// The node a workflow acts on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Target<'t> {
    pub id: &'t str,
    /// Restrict the lookup to one zone.
    pub zone: Option<&'t str>,
    /// Runtime version for create/reimage; defaults to the node's current one.
    pub version: Option<&'t str>,
}

/// Result of a lifecycle command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOutcome {
    /// The workflow ran to completion (or was fully simulated).
    Completed,
    /// The operator declined; no step ran.
    Aborted,
    /// The precondition did not hold; no step ran.
    Skipped,
}

impl From<RunOutcome> for LifecycleOutcome {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Completed => Self::Completed,
            RunOutcome::Aborted => Self::Aborted,
        }
    }
}

/// Builds and runs the named workflows.
pub struct Lifecycle<'a> {
    lookup: &'a dyn TpuLookup,
    executor: &'a dyn CommandExecutor,
    clock: &'a dyn Clock,
    commands: CommandBuilder,
    run: RunConfig,
    wait: WaitPolicy,
}

impl<'a> Lifecycle<'a> {
    pub fn new(
        lookup: &'a dyn TpuLookup,
        executor: &'a dyn CommandExecutor,
        clock: &'a dyn Clock,
        commands: CommandBuilder,
        run: RunConfig,
        wait: WaitPolicy,
    ) -> Self {
        Self {
            lookup,
            executor,
            clock,
            commands,
            run,
            wait,
        }
    }

    /// Delete the node, then print how to recreate it.
    pub fn delete(&self, target: Target<'_>, ui: &mut dyn UserInterface) -> Result<LifecycleOutcome> {
        let tpu = self.lookup.get(target.id, target.zone)?;
        show_current_status(&tpu, ui);

        let steps = self.delete_steps(&tpu, target.zone);
        let outcome = self.runner().run(steps, ui)?;

        if outcome == RunOutcome::Completed {
            let create = self.commands.create(&tpu, target.zone, target.version);
            if self.run.dry_run {
                ui.success(&format!("TPU {} would be deleted.", tpu.id));
                ui.show_step("You could then recreate the TPU with:", Some(&create));
            } else {
                ui.success(&format!("TPU {} is deleted.", tpu.id));
                ui.show_step("You can recreate the TPU with:", Some(&create));
            }
        }
        Ok(outcome.into())
    }

    /// Reimage the node in place and wait for it to become healthy.
    pub fn reimage(&self, target: Target<'_>, ui: &mut dyn UserInterface) -> Result<LifecycleOutcome> {
        let tpu = self.lookup.get(target.id, target.zone)?;

        let steps = self.reimage_steps(&tpu, target.version);
        let outcome = self.runner().run(steps, ui)?;

        if outcome == RunOutcome::Completed {
            self.announce_ready(&tpu, ui);
        }
        Ok(outcome.into())
    }

    /// Delete and re-create the node with the same shape, then wait for it.
    ///
    /// With `only_if_preempted`, a node that is not PREEMPTED is left alone.
    pub fn recreate(
        &self,
        target: Target<'_>,
        only_if_preempted: bool,
        ui: &mut dyn UserInterface,
    ) -> Result<LifecycleOutcome> {
        let tpu = self.lookup.get(target.id, target.zone)?;
        show_current_status(&tpu, ui);

        if only_if_preempted && !tpu.is_preempted() {
            info!("TPU {} is {}; not recreating", tpu.id, tpu.state);
            ui.message(&format!(
                "TPU {} is not preempted ({}); nothing to do.",
                tpu.id, tpu.state
            ));
            return Ok(LifecycleOutcome::Skipped);
        }

        let steps = self.recreate_steps(&tpu, target.zone, target.version);
        let outcome = self.runner().run(steps, ui)?;

        if outcome == RunOutcome::Completed {
            self.announce_ready(&tpu, ui);
        }
        Ok(outcome.into())
    }

    /// `[delete]`
    pub fn delete_steps(&self, tpu: &Tpu, zone: Option<&str>) -> Vec<Step<'a>> {
        vec![Step::command("delete TPU", self.commands.delete(tpu, zone))]
    }

    /// `[reimage, wait-healthy]`
    pub fn reimage_steps(&self, tpu: &Tpu, version: Option<&str>) -> Vec<Step<'a>> {
        vec![
            Step::command("reimage TPU", self.commands.reimage(tpu, version)),
            self.wait_step(tpu),
        ]
    }

    /// `[delete, create, wait-healthy]`
    pub fn recreate_steps(
        &self,
        tpu: &Tpu,
        zone: Option<&str>,
        version: Option<&str>,
    ) -> Vec<Step<'a>> {
        vec![
            Step::command("delete TPU", self.commands.delete(tpu, zone)),
            Step::command("create TPU", self.commands.create(tpu, zone, version)),
            self.wait_step(tpu),
        ]
    }

    fn wait_step(&self, tpu: &Tpu) -> Step<'a> {
        let lookup = self.lookup;
        let clock = self.clock;
        let policy = self.wait;
        let id = tpu.id.clone();
        let zone = tpu.zone.clone();

        Step::in_process("wait for TPU to become HEALTHY", move |ui: &mut dyn UserInterface| {
            wait_until_healthy(lookup, &id, Some(&zone), &policy, clock, ui).map(|_| ())
        })
    }

    fn runner(&self) -> WorkflowRunner<'_> {
        WorkflowRunner::new(&self.run, self.executor, self.clock)
    }

    fn announce_ready(&self, tpu: &Tpu, ui: &mut dyn UserInterface) {
        if self.run.dry_run {
            ui.success(&format!("TPU {} would be ready for training.", tpu.id));
        } else {
            ui.success(&format!("TPU {} is ready for training.", tpu.id));
        }
    }
}

fn show_current_status(tpu: &Tpu, ui: &mut dyn UserInterface) {
    ui.message(&format!("Current status of TPU {}:", tpu.id));
    ui.show_status_header(&format_headers());
    ui.show_status(&format_line(tpu, Utc::now()), tpu.status_class());
}
