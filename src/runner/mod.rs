//! Step execution orchestration.
//!
//! - [`Step`] - one labelled unit of work
//! - [`WorkflowRunner`] - confirmation gate, dry run and in-order execution
//! - [`wait_until_healthy`] - the health poll
//! - [`Lifecycle`] - the named delete / reimage / recreate workflows
//!
//! # Example
//!
//! ```
//! use tpudiepie::runner::{MockClock, RunConfig, RunOutcome, Step, WorkflowRunner};
//! use tpudiepie::shell::MockExecutor;
//! use tpudiepie::ui::MockUI;
//!
//! let config = RunConfig { dry_run: true, auto_confirm: true, ..Default::default() };
//! let executor = MockExecutor::new();
//! let clock = MockClock::new();
//! let mut ui = MockUI::new();
//!
//! let runner = WorkflowRunner::new(&config, &executor, &clock);
//! let outcome = runner
//!     .run(vec![Step::command("delete TPU", "gcloud compute tpus delete t1")], &mut ui)
//!     .unwrap();
//!
//! assert_eq!(outcome, RunOutcome::Completed);
//! assert!(executor.commands().is_empty());
//! ```

pub mod clock;
pub mod health;
pub mod lifecycle;
pub mod step;
pub mod workflow;

pub use clock::{Clock, MockClock, SystemClock};
pub use health::{wait_until_healthy, WaitPolicy};
pub use lifecycle::{Lifecycle, LifecycleOutcome, Target};
pub use step::{InProcessAction, Step, StepAction};
pub use workflow::{RunConfig, RunOutcome, WorkflowRunner, DRY_RUN_NOTICE};
