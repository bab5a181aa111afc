//! Configuration file discovery and loading.

use crate::config::schema::TpuConfig;
use crate::error::{Result, TpuError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config location: `~/.tpudiepie/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".tpudiepie").join("config.yml"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the default location is
/// used if present; otherwise built-in defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<TpuConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config_file(&path),
        _ => {
            tracing::debug!("No config file found, using defaults");
            Ok(TpuConfig::default())
        }
    }
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<TpuConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TpuError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TpuError::Io(e)
        }
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into TpuConfig.
///
/// An empty document yields the defaults. Timing keys outside their
/// allowed range are reported as parse errors.
pub fn parse_config(content: &str, source_path: &Path) -> Result<TpuConfig> {
    if content.trim().is_empty() {
        return Ok(TpuConfig::default());
    }

    let parse_error = |message: String| TpuError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    };
    let config: TpuConfig =
        serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
    config.validate().map_err(parse_error)?;
    Ok(config)
}
