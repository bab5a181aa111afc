//! Continuously refreshing status display.

use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use crate::error::{Result, TpuError};
use crate::runner::Clock;
use crate::tpu::TpuLookup;
use crate::ui::UserInterface;

use super::status::{print_report, ReportFormat};

/// Clear the screen and redraw the text report every `interval`.
///
/// Runs until interrupted when `frames` is `None`. A zone that fails to
/// list is reported and retried on the next frame.
pub fn watch(
    lookup: &dyn TpuLookup,
    zone: Option<&str>,
    interval: Duration,
    clock: &dyn Clock,
    ui: &mut dyn UserInterface,
    frames: Option<usize>,
) -> Result<()> {
    let mut drawn = 0;

    loop {
        ui.clear();
        match print_report(lookup, zone, ReportFormat::Text, ui, Utc::now()) {
            Ok(count) => debug!("Watch frame {}: {} TPUs", drawn + 1, count),
            Err(e @ TpuError::ListingFailed { .. }) => ui.error(&e.to_string()),
            Err(e) => return Err(e),
        }

        drawn += 1;
        if frames.is_some_and(|limit| drawn >= limit) {
            return Ok(());
        }
        clock.sleep(interval);
    }
}
