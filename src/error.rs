//! Error types for tpudiepie operations.
//!
//! This module defines [`TpuError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TpuError` for domain-specific errors that need distinct handling
//! - A command that runs but exits non-zero is reported through
//!   [`CommandResult`](crate::shell::CommandResult), not as an error
//! - A declined confirmation is not an error; see
//!   [`RunOutcome::Aborted`](crate::runner::RunOutcome::Aborted)

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for tpudiepie operations.
#[derive(Debug, Error)]
pub enum TpuError {
    /// No TPU matched the requested id.
    #[error("TPU not found: {id}{}", .zone.as_ref().map(|z| format!(" (zone {})", z)).unwrap_or_default())]
    ResourceNotFound { id: String, zone: Option<String> },

    /// The id matched TPUs in more than one zone.
    #[error("TPU {id} exists in several zones ({}); pass --zone", .zones.join(", "))]
    AmbiguousResource { id: String, zones: Vec<String> },

    /// Zone is not one of the configured TPU zones.
    #[error("Unknown zone: {zone}")]
    UnknownZone { zone: String },

    /// A workflow step's external command exited non-zero.
    #[error("Step '{step}' failed with exit code {}", .code.map(|c| c.to_string()).unwrap_or_else(|| "none (killed by signal)".into()))]
    StepFailed { step: String, code: Option<i32> },

    /// The shell could not be started for a command.
    #[error("Could not start shell for '{command}': {message}")]
    CommandFailed { command: String, message: String },

    /// Listing TPUs in a zone failed.
    #[error("Failed to list TPUs in {zone}: {message}")]
    ListingFailed { zone: String, message: String },

    /// A TPU record was missing a field the tool relies on.
    #[error("Malformed TPU record: {message}")]
    MalformedRecord { message: String },

    /// The health poll exceeded its configured bound.
    #[error("TPU {id} did not become healthy within {}s", .waited.as_secs())]
    WaitTimeout { id: String, waited: Duration },

    /// Configuration file given explicitly but not present.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tpudiepie operations.
pub type Result<T> = std::result::Result<T, TpuError>;
