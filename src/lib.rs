//! tpudiepie - Monitor and manage Cloud TPU nodes.
//!
//! tpudiepie lists TPU nodes with a colored one-line status each, and runs
//! small confirm-then-execute workflows against them: delete, reimage, and
//! recreate (optionally only when preempted), waiting for the node to come
//! back HEALTHY.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`report`] - Status listing and watch mode
//! - [`runner`] - Workflow steps, dry run, confirmation and the health poll
//! - [`shell`] - Shell command execution
//! - [`tpu`] - TPU records, formatting, lookup and gcloud commands
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use tpudiepie::runner::{Lifecycle, LifecycleOutcome, MockClock, RunConfig, Target, WaitPolicy};
//! use tpudiepie::shell::MockExecutor;
//! use tpudiepie::tpu::{CommandBuilder, SequenceLookup, Tpu};
//! use tpudiepie::ui::MockUI;
//!
//! let node = Tpu::from_json(serde_json::json!({
//!     "name": "projects/p/locations/us-central1-f/nodes/t1",
//!     "state": "READY",
//!     "health": "HEALTHY"
//! })).unwrap();
//!
//! let lookup = SequenceLookup::fixed(vec![node]);
//! let executor = MockExecutor::new();
//! let clock = MockClock::new();
//! let run = RunConfig { auto_confirm: true, ..Default::default() };
//! let lifecycle = Lifecycle::new(
//!     &lookup, &executor, &clock,
//!     CommandBuilder::new("gcloud", None), run, WaitPolicy::default(),
//! );
//!
//! let mut ui = MockUI::new();
//! let target = Target { id: "t1", ..Default::default() };
//! let outcome = lifecycle.recreate(target, true, &mut ui).unwrap();
//!
//! // Not preempted, so nothing happens.
//! assert_eq!(outcome, LifecycleOutcome::Skipped);
//! assert!(executor.commands().is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod shell;
pub mod tpu;
pub mod ui;

pub use error::{Result, TpuError};
