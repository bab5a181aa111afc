//! Status reporting: one-shot listing and watch mode.

pub mod status;
pub mod watch;

pub use status::{print_report, ReportFormat};
pub use watch::watch;
