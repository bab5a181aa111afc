//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the collaborators every command shares
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::TpuConfig;
use crate::error::Result;
use crate::runner::Clock;
use crate::shell::CommandExecutor;
use crate::tpu::{GcloudLookup, TpuLookup};
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::delete::DeleteCommand;
use super::list::ListCommand;
use super::recreate::RecreateCommand;
use super::reimage::ReimageCommand;
use super::watch::WatchCommand;

/// Exit code when the operator declines a workflow.
pub const EXIT_ABORTED: i32 = 3;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// The operator declined; nothing was done.
    pub fn aborted() -> Self {
        Self::failure(EXIT_ABORTED)
    }
}

/// Collaborators shared by every command.
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub config: &'a TpuConfig,
    pub lookup: &'a dyn TpuLookup,
    pub executor: &'a dyn CommandExecutor,
    pub clock: &'a dyn Clock,
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    config: &'a TpuConfig,
    executor: &'a dyn CommandExecutor,
    clock: &'a dyn Clock,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a dispatcher over the given configuration and collaborators.
    pub fn new(config: &'a TpuConfig, executor: &'a dyn CommandExecutor, clock: &'a dyn Clock) -> Self {
        Self {
            config,
            executor,
            clock,
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Node lookups go through gcloud.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let lookup = GcloudLookup::new(self.executor, self.config);
        let ctx = CommandContext {
            config: self.config,
            lookup: &lookup,
            executor: self.executor,
            clock: self.clock,
        };
        dispatch_with(ctx, cli, ui)
    }
}

/// Route `cli` to its command using explicit collaborators.
pub fn dispatch_with(ctx: CommandContext<'_>, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
    match &cli.command {
        Commands::List(args) => ListCommand::new(ctx, args.clone()).execute(ui),
        Commands::Top(args) | Commands::Tail(args) => {
            WatchCommand::new(ctx, args.clone()).execute(ui)
        }
        Commands::Delete(args) => DeleteCommand::new(ctx, args.clone()).execute(ui),
        Commands::Reimage(args) => ReimageCommand::new(ctx, args.clone()).execute(ui),
        Commands::Recreate(args) => RecreateCommand::new(ctx, args.clone()).execute(ui),
        Commands::Completions(args) => CompletionsCommand::new(args.clone()).execute(ui),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::MockClock;
    use crate::shell::MockExecutor;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_codes() {
        assert_eq!(CommandResult::success().exit_code, 0);
        assert_eq!(CommandResult::failure(1).exit_code, 1);
        let aborted = CommandResult::aborted();
        assert!(!aborted.success);
        assert_eq!(aborted.exit_code, EXIT_ABORTED);
    }

    #[test]
    fn dispatches_list_through_gcloud() {
        let config = TpuConfig {
            zones: vec!["us-central1-f".into()],
            ..Default::default()
        };
        let executor = MockExecutor::new();
        executor.set_output("gcloud compute tpus list", "[]");
        let clock = MockClock::new();
        let dispatcher = CommandDispatcher::new(&config, &executor, &clock);
        let mut ui = MockUI::new();

        let cli = Cli::parse_from(["tpudiepie", "list", "--format", "json"]);
        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.data(), &["[]".to_string()]);
        assert_eq!(
            executor.commands(),
            vec!["gcloud compute tpus list --zone us-central1-f --format json".to_string()]
        );
    }
}
