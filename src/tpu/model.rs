//! TPU node records.
//!
//! [`Tpu`] wraps one node as reported by `gcloud compute tpus list
//! --format=json`. The raw JSON is kept untouched for structured output;
//! the typed fields are derived from it once per query and never cached
//! across polls.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, TpuError};

/// Lifecycle state of a node (`state` in the gcloud record).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeState {
    Ready,
    Preempted,
    Creating,
    Restarting,
    Reimaging,
    Deleting,
    Repairing,
    Stopping,
    Stopped,
    Starting,
    /// A state this tool does not know by name.
    Other(String),
}

impl FromStr for NodeState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "READY" => Self::Ready,
            "PREEMPTED" => Self::Preempted,
            "CREATING" => Self::Creating,
            "RESTARTING" => Self::Restarting,
            "REIMAGING" => Self::Reimaging,
            "DELETING" => Self::Deleting,
            "REPAIRING" => Self::Repairing,
            "STOPPING" => Self::Stopping,
            "STOPPED" => Self::Stopped,
            "STARTING" => Self::Starting,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ready => "READY",
            Self::Preempted => "PREEMPTED",
            Self::Creating => "CREATING",
            Self::Restarting => "RESTARTING",
            Self::Reimaging => "REIMAGING",
            Self::Deleting => "DELETING",
            Self::Repairing => "REPAIRING",
            Self::Stopping => "STOPPING",
            Self::Stopped => "STOPPED",
            Self::Starting => "STARTING",
            Self::Other(s) => s,
        };
        f.write_str(s)
    }
}

/// Health reported by the node (`health` in the gcloud record).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Unhealthy,
    Timeout,
    UnhealthyTensorflow,
    UnhealthyMaintenance,
    /// Field absent, typical while a node is being created.
    Unknown,
    Other(String),
}

impl FromStr for Health {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "HEALTHY" => Self::Healthy,
            "UNHEALTHY" => Self::Unhealthy,
            "TIMEOUT" => Self::Timeout,
            "UNHEALTHY_TENSORFLOW" => Self::UnhealthyTensorflow,
            "UNHEALTHY_MAINTENANCE" => Self::UnhealthyMaintenance,
            "" | "HEALTH_UNSPECIFIED" => Self::Unknown,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Healthy => "HEALTHY",
            Self::Unhealthy => "UNHEALTHY",
            Self::Timeout => "TIMEOUT",
            Self::UnhealthyTensorflow => "UNHEALTHY_TENSORFLOW",
            Self::UnhealthyMaintenance => "UNHEALTHY_MAINTENANCE",
            Self::Unknown => "UNKNOWN",
            Self::Other(s) => s,
        };
        f.write_str(s)
    }
}

/// Presentation urgency of a node's status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// READY and HEALTHY.
    Nominal,
    /// PREEMPTED.
    Critical,
    /// Anything else.
    Transitional,
}

/// Subset of the gcloud node record this tool reads.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct NodeFields {
    name: String,
    accelerator_type: String,
    state: String,
    health: String,
    tensorflow_version: String,
    network: String,
    cidr_block: String,
    description: Option<String>,
    create_time: Option<String>,
    network_endpoints: Vec<NetworkEndpoint>,
    ip_address: Option<String>,
    port: Option<String>,
    scheduling_config: SchedulingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct NetworkEndpoint {
    ip_address: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SchedulingConfig {
    preemptible: bool,
}

/// A TPU node as seen by the most recent query.
#[derive(Debug, Clone)]
pub struct Tpu {
    raw: Value,
    /// GCP project from the resource name.
    pub project: String,
    /// Zone from the resource name.
    pub zone: String,
    /// Node id (last segment of the resource name).
    pub id: String,
    /// Accelerator type, e.g. `v3-8`.
    pub accelerator_type: String,
    /// Lifecycle state.
    pub state: NodeState,
    /// Reported health.
    pub health: Health,
    /// Runtime (TensorFlow) version.
    pub version: String,
    /// VPC network.
    pub network: String,
    /// CIDR block reserved for the node.
    pub cidr_block: String,
    /// Free-form description, if any.
    pub description: Option<String>,
    /// Whether the node is preemptible.
    pub preemptible: bool,
    /// Master endpoint IP, if assigned.
    pub ip_address: Option<String>,
    /// Master endpoint port, if assigned.
    pub port: Option<String>,
    /// Creation time, if reported.
    pub created: Option<DateTime<Utc>>,
}

impl Tpu {
    /// Parse a node from its gcloud JSON record.
    ///
    /// `name` must have the form `projects/P/locations/Z/nodes/ID`.
    pub fn from_json(raw: Value) -> Result<Self> {
        let fields: NodeFields =
            serde_json::from_value(raw.clone()).map_err(|e| TpuError::MalformedRecord {
                message: e.to_string(),
            })?;

        let (project, zone, id) = parse_name(&fields.name)?;

        let endpoint = fields.network_endpoints.first();
        let ip_address = endpoint
            .and_then(|e| e.ip_address.clone())
            .or(fields.ip_address);
        let port = endpoint
            .and_then(|e| e.port.map(|p| p.to_string()))
            .or(fields.port);

        let created = fields
            .create_time
            .as_deref()
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map(|t| t.with_timezone(&Utc));

        Ok(Self {
            raw,
            project,
            zone,
            id,
            accelerator_type: fields.accelerator_type,
            state: fields.state.parse().unwrap_or(NodeState::Other(fields.state)),
            health: fields.health.parse().unwrap_or(Health::Unknown),
            version: fields.tensorflow_version,
            network: fields.network,
            cidr_block: fields.cidr_block,
            description: fields.description.filter(|d| !d.is_empty()),
            preemptible: fields.scheduling_config.preemptible,
            ip_address,
            port,
            created,
        })
    }

    /// The record exactly as gcloud returned it.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// READY and HEALTHY.
    pub fn is_ready_and_healthy(&self) -> bool {
        self.state == NodeState::Ready && self.health == Health::Healthy
    }

    /// PREEMPTED.
    pub fn is_preempted(&self) -> bool {
        self.state == NodeState::Preempted
    }

    /// Three-way urgency used for coloring.
    pub fn status_class(&self) -> StatusClass {
        if self.is_ready_and_healthy() {
            StatusClass::Nominal
        } else if self.is_preempted() {
            StatusClass::Critical
        } else {
            StatusClass::Transitional
        }
    }

    /// Master endpoint as `ip:port`, empty when unassigned.
    pub fn master(&self) -> String {
        match (&self.ip_address, &self.port) {
            (Some(ip), Some(port)) => format!("{}:{}", ip, port),
            (Some(ip), None) => ip.clone(),
            _ => String::new(),
        }
    }
}

fn parse_name(name: &str) -> Result<(String, String, String)> {
    let parts: Vec<&str> = name.split('/').collect();
    match parts.as_slice() {
        ["projects", project, "locations", zone, "nodes", id] if !id.is_empty() => {
            Ok((project.to_string(), zone.to_string(), id.to_string()))
        }
        _ => Err(TpuError::MalformedRecord {
            message: format!("unexpected node name '{}'", name),
        }),
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::node;
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_gcloud_record() {
        let tpu = Tpu::from_json(node("tpu-euw4a-0", "europe-west4-a", "READY", Some("HEALTHY")))
            .unwrap();
        assert_eq!(tpu.project, "my-proj");
        assert_eq!(tpu.zone, "europe-west4-a");
        assert_eq!(tpu.id, "tpu-euw4a-0");
        assert_eq!(tpu.accelerator_type, "v3-8");
        assert_eq!(tpu.state, NodeState::Ready);
        assert_eq!(tpu.health, Health::Healthy);
        assert_eq!(tpu.version, "2.3");
        assert!(tpu.preemptible);
        assert_eq!(tpu.master(), "10.48.0.2:8470");
        assert!(tpu.created.is_some());
    }

    #[test]
    fn raw_record_is_untouched() {
        let raw = node("a", "us-central1-f", "CREATING", None);
        let tpu = Tpu::from_json(raw.clone()).unwrap();
        assert_eq!(tpu.raw(), &raw);
    }

    #[test]
    fn missing_health_is_unknown() {
        let tpu = Tpu::from_json(node("a", "us-central1-f", "CREATING", None)).unwrap();
        assert_eq!(tpu.health, Health::Unknown);
        assert_eq!(tpu.health.to_string(), "UNKNOWN");
    }

    #[test]
    fn unknown_state_round_trips_text() {
        let tpu = Tpu::from_json(node("a", "us-central1-f", "SUSPENDED", None)).unwrap();
        assert_eq!(tpu.state, NodeState::Other("SUSPENDED".into()));
        assert_eq!(tpu.state.to_string(), "SUSPENDED");
    }

    #[test]
    fn bad_name_is_malformed() {
        let result = Tpu::from_json(json!({ "name": "nodes/a" }));
        assert!(matches!(result, Err(TpuError::MalformedRecord { .. })));
    }

    #[test]
    fn classification_is_three_way() {
        let ok = Tpu::from_json(node("a", "z", "READY", Some("HEALTHY"))).unwrap();
        let gone = Tpu::from_json(node("a", "z", "PREEMPTED", None)).unwrap();
        let sick = Tpu::from_json(node("a", "z", "READY", Some("UNHEALTHY"))).unwrap();
        assert_eq!(ok.status_class(), StatusClass::Nominal);
        assert_eq!(gone.status_class(), StatusClass::Critical);
        assert_eq!(sick.status_class(), StatusClass::Transitional);
    }

    #[test]
    fn legacy_top_level_endpoint_fields() {
        let mut raw = node("a", "z", "READY", Some("HEALTHY"));
        raw.as_object_mut().unwrap().remove("networkEndpoints");
        raw["ipAddress"] = json!("10.0.0.2");
        raw["port"] = json!("8470");
        let tpu = Tpu::from_json(raw).unwrap();
        assert_eq!(tpu.master(), "10.0.0.2:8470");
    }
}
