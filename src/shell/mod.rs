//! Shell command execution.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{execute, CommandExecutor, CommandResult, ShellExecutor};
pub use mock::MockExecutor;
pub use platform::is_ci;
