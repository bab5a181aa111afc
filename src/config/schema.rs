//! Configuration schema definitions.
//!
//! This module contains the struct that maps to the YAML configuration
//! file format. Every key is optional; a missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Zones that offer Cloud TPUs, used when the config does not list any.
pub const DEFAULT_ZONES: &[&str] = &[
    "asia-east1-c",
    "europe-west4-a",
    "us-central1-a",
    "us-central1-b",
    "us-central1-c",
    "us-central1-f",
    "us-east1-d",
];

/// Root configuration structure for config.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TpuConfig {
    /// GCP project passed to gcloud as `--project`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// gcloud executable (name on PATH or absolute path)
    pub gcloud: String,

    /// Zones enumerated when no `--zone` is given
    pub zones: Vec<String>,

    /// Pause after each completed workflow step
    pub step_delay_secs: f64,

    /// Simulated pause for each step in a dry run
    pub dry_run_delay_secs: f64,

    /// Sleep between health polls
    pub poll_interval_secs: f64,

    /// Refresh interval for `top` / `tail`
    pub watch_interval_secs: f64,

    /// Upper bound on the health poll; unset waits forever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_timeout_secs: Option<f64>,
}

impl Default for TpuConfig {
    fn default() -> Self {
        Self {
            project: None,
            gcloud: "gcloud".to_string(),
            zones: DEFAULT_ZONES.iter().map(|z| z.to_string()).collect(),
            step_delay_secs: 1.0,
            dry_run_delay_secs: 3.0,
            poll_interval_secs: 30.0,
            watch_interval_secs: 5.0,
            wait_timeout_secs: None,
        }
    }
}

impl TpuConfig {
    /// Post-step delay as a [`Duration`].
    pub fn step_delay(&self) -> Duration {
        secs(self.step_delay_secs)
    }

    /// Dry-run simulated delay as a [`Duration`].
    pub fn dry_run_delay(&self) -> Duration {
        secs(self.dry_run_delay_secs)
    }

    /// Health poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        secs(self.poll_interval_secs)
    }

    /// Watch refresh interval as a [`Duration`].
    pub fn watch_interval(&self) -> Duration {
        secs(self.watch_interval_secs)
    }

    /// Health poll bound, if any.
    pub fn wait_timeout(&self) -> Option<Duration> {
        self.wait_timeout_secs.map(secs)
    }

    /// Check the timing keys.
    ///
    /// Poll and watch intervals must be positive; delays and the wait
    /// timeout may be zero. Nothing may be negative or non-finite.
    pub fn validate(&self) -> std::result::Result<(), String> {
        check_interval("poll_interval_secs", self.poll_interval_secs)?;
        check_interval("watch_interval_secs", self.watch_interval_secs)?;
        check_delay("step_delay_secs", self.step_delay_secs)?;
        check_delay("dry_run_delay_secs", self.dry_run_delay_secs)?;
        if let Some(timeout) = self.wait_timeout_secs {
            check_delay("wait_timeout_secs", timeout)?;
        }
        Ok(())
    }
}

fn check_interval(key: &str, value: f64) -> std::result::Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{key} must be a positive number of seconds, got {value}"))
    }
}

fn check_delay(key: &str, value: f64) -> std::result::Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{key} must be zero or more seconds, got {value}"))
    }
}

/// Negative and non-finite values clamp to zero.
fn secs(value: f64) -> Duration {
    if value.is_finite() && value > 0.0 {
        Duration::from_secs_f64(value)
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_timings() {
        let config = TpuConfig::default();
        assert_eq!(config.step_delay(), Duration::from_secs(1));
        assert_eq!(config.dry_run_delay(), Duration::from_secs(3));
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.watch_interval(), Duration::from_secs(5));
        assert_eq!(config.wait_timeout(), None);
        assert_eq!(config.gcloud, "gcloud");
        assert!(config.zones.contains(&"europe-west4-a".to_string()));
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config: TpuConfig =
            serde_yaml::from_str("project: my-proj\nstep_delay_secs: 0.5").unwrap();
        assert_eq!(config.project.as_deref(), Some("my-proj"));
        assert_eq!(config.step_delay(), Duration::from_millis(500));
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
    }

    #[test]
    fn negative_delay_clamps_to_zero() {
        let config = TpuConfig {
            step_delay_secs: -2.0,
            ..Default::default()
        };
        assert_eq!(config.step_delay(), Duration::ZERO);
    }

    #[test]
    fn defaults_validate() {
        assert!(TpuConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_poll_interval_is_invalid() {
        let config = TpuConfig {
            poll_interval_secs: 0.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("poll_interval_secs"));
    }

    #[test]
    fn zero_delays_are_valid() {
        let config = TpuConfig {
            step_delay_secs: 0.0,
            dry_run_delay_secs: 0.0,
            wait_timeout_secs: Some(0.0),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_finite_values_are_invalid() {
        let config = TpuConfig {
            watch_interval_secs: f64::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TpuConfig {
            wait_timeout_secs: Some(f64::NAN),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn wait_timeout_converts() {
        let config: TpuConfig = serde_yaml::from_str("wait_timeout_secs: 600").unwrap();
        assert_eq!(config.wait_timeout(), Some(Duration::from_secs(600)));
    }
}
