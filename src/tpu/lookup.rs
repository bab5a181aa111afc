//! Resolving TPU nodes.
//!
//! [`TpuLookup`] is the seam between the workflows and the cloud. The
//! production [`GcloudLookup`] shells out to `gcloud compute tpus list`;
//! [`SequenceLookup`] replays scripted snapshots for tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use serde_json::Value;

use crate::config::TpuConfig;
use crate::error::{Result, TpuError};
use crate::shell::CommandExecutor;

use super::model::Tpu;

/// Queries current TPU state. Every call re-reads the source.
pub trait TpuLookup {
    /// All nodes in `zone`, or in every known zone when `None`.
    fn list(&self, zone: Option<&str>) -> Result<Vec<Tpu>>;

    /// The single node named `id`.
    fn get(&self, id: &str, zone: Option<&str>) -> Result<Tpu> {
        let mut matches: Vec<Tpu> = self
            .list(zone)?
            .into_iter()
            .filter(|t| t.id == id)
            .collect();

        match matches.len() {
            0 => Err(TpuError::ResourceNotFound {
                id: id.to_string(),
                zone: zone.map(String::from),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(TpuError::AmbiguousResource {
                id: id.to_string(),
                zones: matches.into_iter().map(|t| t.zone).collect(),
            }),
        }
    }
}

/// Lists nodes through the gcloud CLI.
pub struct GcloudLookup<'a> {
    executor: &'a dyn CommandExecutor,
    config: &'a TpuConfig,
}

impl<'a> GcloudLookup<'a> {
    /// Create a lookup using `config` for the gcloud binary, project and zones.
    pub fn new(executor: &'a dyn CommandExecutor, config: &'a TpuConfig) -> Self {
        Self { executor, config }
    }

    /// The list command for one zone.
    pub fn list_command(&self, zone: &str) -> String {
        let mut args = vec![
            self.config.gcloud.clone(),
            "compute".into(),
            "tpus".into(),
            "list".into(),
            "--zone".into(),
            zone.to_string(),
            "--format".into(),
            "json".into(),
        ];
        if let Some(project) = &self.config.project {
            args.push("--project".into());
            args.push(project.clone());
        }
        shell_words::join(args)
    }

    /// Raw records for one zone, exactly as gcloud printed them.
    pub fn list_raw(&self, zone: &str) -> Result<Vec<Value>> {
        let command = self.list_command(zone);
        let result = self.executor.capture(&command)?;

        if !result.success {
            return Err(TpuError::ListingFailed {
                zone: zone.to_string(),
                message: first_line(&result.stderr)
                    .unwrap_or_else(|| format!("exit code {:?}", result.exit_code)),
            });
        }

        let stdout = result.stdout.trim();
        if stdout.is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(stdout).map_err(|e| TpuError::ListingFailed {
            zone: zone.to_string(),
            message: format!("unparseable gcloud output: {}", e),
        })
    }

    fn zones<'z>(&'z self, zone: Option<&'z str>) -> Result<Vec<&'z str>> {
        match zone {
            Some(z) => {
                check_zone(self.config, z)?;
                Ok(vec![z])
            }
            None => Ok(self.config.zones.iter().map(String::as_str).collect()),
        }
    }
}

impl TpuLookup for GcloudLookup<'_> {
    fn list(&self, zone: Option<&str>) -> Result<Vec<Tpu>> {
        let mut tpus = Vec::new();
        for z in self.zones(zone)? {
            let records = self.list_raw(z)?;
            tracing::debug!("{} TPUs in {}", records.len(), z);
            for record in records {
                tpus.push(Tpu::from_json(record)?);
            }
        }
        Ok(tpus)
    }
}

/// Reject zones missing from a non-empty configured zone list.
pub fn check_zone(config: &TpuConfig, zone: &str) -> Result<()> {
    if config.zones.is_empty() || config.zones.iter().any(|z| z == zone) {
        Ok(())
    } else {
        Err(TpuError::UnknownZone {
            zone: zone.to_string(),
        })
    }
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(String::from)
}

/// Replays a queue of snapshots, one per `list` call.
///
/// Once the queue is drained the last snapshot repeats.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tpudiepie::tpu::{SequenceLookup, Tpu, TpuLookup};
///
/// let node = Tpu::from_json(json!({
///     "name": "projects/p/locations/us-central1-f/nodes/t1",
///     "state": "READY",
///     "health": "HEALTHY"
/// })).unwrap();
///
/// let lookup = SequenceLookup::fixed(vec![node]);
/// assert_eq!(lookup.get("t1", None).unwrap().id, "t1");
/// assert_eq!(lookup.calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SequenceLookup {
    snapshots: RefCell<VecDeque<Vec<Tpu>>>,
    last: RefCell<Vec<Tpu>>,
    calls: Cell<usize>,
}

impl SequenceLookup {
    /// Snapshots returned in order.
    pub fn new(snapshots: Vec<Vec<Tpu>>) -> Self {
        Self {
            snapshots: RefCell::new(snapshots.into()),
            ..Default::default()
        }
    }

    /// A single snapshot returned forever.
    pub fn fixed(tpus: Vec<Tpu>) -> Self {
        Self::new(vec![tpus])
    }

    /// Number of `list` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl TpuLookup for SequenceLookup {
    fn list(&self, zone: Option<&str>) -> Result<Vec<Tpu>> {
        self.calls.set(self.calls.get() + 1);

        if let Some(next) = self.snapshots.borrow_mut().pop_front() {
            *self.last.borrow_mut() = next;
        }

        Ok(self
            .last
            .borrow()
            .iter()
            .filter(|t| zone.is_none_or(|z| t.zone == z))
            .cloned()
            .collect())
    }
}
