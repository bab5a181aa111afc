//! Configuration loading for tpudiepie.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use tpudiepie::config::{load_config, TpuConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "project: my-research").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! assert_eq!(config.project, Some("my-research".to_string()));
//! assert_eq!(config.gcloud, TpuConfig::default().gcloud);
//! ```
//!
//! # Configuration File Location
//!
//! 1. `--config <path>` or `TPUDIEPIE_CONFIG` (must exist)
//! 2. `~/.tpudiepie/config.yml` (optional)

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, load_config, load_config_file, parse_config};
pub use schema::{TpuConfig, DEFAULT_ZONES};
