//! Fixed-width status lines.

use chrono::{DateTime, Utc};

use super::model::Tpu;

/// Column headers with their minimum widths.
const COLUMNS: [(&str, usize); 11] = [
    ("ZONE", 15),
    ("PREEMPTIBLE", 11),
    ("AGE", 8),
    ("ID", 20),
    ("STATUS", 10),
    ("HEALTH", 11),
    ("VERSION", 10),
    ("NETWORK", 10),
    ("MASTER", 18),
    ("RANGE", 16),
    ("TYPE", 8),
];

/// The header line matching [`format_line`].
pub fn format_headers() -> String {
    let cells: Vec<String> = COLUMNS.iter().map(|(h, _)| h.to_string()).collect();
    join_cells(&cells)
}

/// One node as a single status line, with age measured against `now`.
pub fn format_line(tpu: &Tpu, now: DateTime<Utc>) -> String {
    let age = tpu
        .created
        .map(|c| format_age(c, now))
        .unwrap_or_default();

    let cells = [
        tpu.zone.clone(),
        tpu.preemptible.to_string(),
        age,
        tpu.id.clone(),
        tpu.state.to_string(),
        tpu.health.to_string(),
        tpu.version.clone(),
        tpu.network.clone(),
        tpu.master(),
        tpu.cidr_block.clone(),
        tpu.accelerator_type.clone(),
    ];
    join_cells(&cells)
}

fn join_cells(cells: &[String]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(COLUMNS.iter())
        .map(|(cell, (_, width))| format!("{:width$}", cell, width = width))
        .collect();
    padded.join(" ").trim_end().to_string()
}

/// Compact age such as `45s`, `12m`, `3h5m`, `2d4h`.
pub fn format_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(created).num_seconds().max(0);

    if seconds < 60 {
        return format!("{}s", seconds);
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return match minutes % 60 {
            0 => format!("{}h", hours),
            m => format!("{}h{}m", hours, m),
        };
    }

    let days = hours / 24;
    match hours % 24 {
        0 => format!("{}d", days),
        h => format!("{}d{}h", days, h),
    }
}
