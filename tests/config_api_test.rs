//! Integration tests for config module public API.

use std::fs;
use std::time::Duration;

use tempfile::TempDir;
use tpudiepie::config::{load_config, TpuConfig, DEFAULT_ZONES};
use tpudiepie::TpuError;

#[test]
fn public_api_is_accessible() {
    let config = TpuConfig::default();
    assert_eq!(config.zones.len(), DEFAULT_ZONES.len());
    assert_eq!(config.poll_interval(), Duration::from_secs(30));
}

#[test]
fn full_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yml");
    fs::write(
        &path,
        r#"
project: research
gcloud: /opt/google-cloud-sdk/bin/gcloud
zones:
  - europe-west4-a
step_delay_secs: 0.5
poll_interval_secs: 10
wait_timeout_secs: 1800
"#,
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();

    assert_eq!(config.project.as_deref(), Some("research"));
    assert_eq!(config.gcloud, "/opt/google-cloud-sdk/bin/gcloud");
    assert_eq!(config.zones, vec!["europe-west4-a".to_string()]);
    assert_eq!(config.step_delay(), Duration::from_millis(500));
    assert_eq!(config.dry_run_delay(), Duration::from_secs(3));
    assert_eq!(config.poll_interval(), Duration::from_secs(10));
    assert_eq!(config.wait_timeout(), Some(Duration::from_secs(1800)));
}

#[test]
fn malformed_config_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yml");
    fs::write(&path, "zones: {not: a list}").unwrap();

    match load_config(Some(&path)) {
        Err(TpuError::ConfigParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {:?}", other),
    }
}
