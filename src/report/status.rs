//! One-shot status report.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::Result;
use crate::tpu::{format_headers, format_line, Tpu, TpuLookup};
use crate::ui::UserInterface;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Fixed-width table, one colored line per node
    #[default]
    Text,
    /// The full gcloud records as a JSON array
    #[value(alias = "structured")]
    Json,
}

/// List nodes in `zone` (or every configured zone) and print them.
///
/// Returns the number of nodes reported.
pub fn print_report(
    lookup: &dyn TpuLookup,
    zone: Option<&str>,
    format: ReportFormat,
    ui: &mut dyn UserInterface,
    now: DateTime<Utc>,
) -> Result<usize> {
    let tpus = lookup.list(zone)?;

    match format {
        ReportFormat::Text => {
            ui.show_status_header(&format_headers());
            for tpu in &tpus {
                ui.show_status(&format_line(tpu, now), tpu.status_class());
            }
        }
        ReportFormat::Json => {
            let records: Vec<&Value> = tpus.iter().map(Tpu::raw).collect();
            ui.data(&serde_json::to_string(&records)?);
        }
    }

    Ok(tpus.len())
}
