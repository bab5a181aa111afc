//! Waiting for a node to become READY and HEALTHY.

use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use crate::error::{Result, TpuError};
use crate::tpu::{format_line, Tpu, TpuLookup};
use crate::ui::UserInterface;

use super::clock::Clock;

/// How often to poll and for how long.
#[derive(Debug, Clone, Copy)]
pub struct WaitPolicy {
    pub interval: Duration,
    /// `None` polls until the node is healthy.
    pub timeout: Option<Duration>,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            timeout: None,
        }
    }
}

/// Poll `id` until it reports READY and HEALTHY.
///
/// Each attempt re-reads the node through `lookup`. While unhealthy, the
/// current status line and a wait notice are printed before sleeping for
/// the policy interval. A node that briefly disappears from the listing
/// (or a zone that fails to list) counts as not yet healthy.
pub fn wait_until_healthy(
    lookup: &dyn TpuLookup,
    id: &str,
    zone: Option<&str>,
    policy: &WaitPolicy,
    clock: &dyn Clock,
    ui: &mut dyn UserInterface,
) -> Result<Tpu> {
    let mut waited = Duration::ZERO;

    loop {
        match lookup.get(id, zone) {
            Ok(tpu) if tpu.is_ready_and_healthy() => {
                debug!("TPU {} healthy after {:?}", id, waited);
                return Ok(tpu);
            }
            Ok(tpu) => {
                ui.show_status(&format_line(&tpu, Utc::now()), tpu.status_class());
            }
            Err(e @ (TpuError::ResourceNotFound { .. } | TpuError::ListingFailed { .. })) => {
                ui.warning(&e.to_string());
            }
            Err(e) => return Err(e),
        }

        if let Some(limit) = policy.timeout {
            if waited >= limit {
                return Err(TpuError::WaitTimeout {
                    id: id.to_string(),
                    waited,
                });
            }
        }

        ui.message(&format!(
            "TPU {} not yet healthy; waiting {} seconds...",
            id,
            policy.interval.as_secs()
        ));
        clock.sleep(policy.interval);
        waited += policy.interval;
    }
}
