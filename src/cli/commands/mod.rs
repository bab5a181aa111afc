//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands receive their
//! collaborators through a [`CommandContext`], so tests can substitute
//! the cloud, the shell and the clock.

pub mod completions;
pub mod delete;
pub mod dispatcher;
pub mod lifecycle;
pub mod list;
pub mod recreate;
pub mod reimage;
pub mod watch;

pub use dispatcher::{
    dispatch_with, Command, CommandContext, CommandDispatcher, CommandResult, EXIT_ABORTED,
};
