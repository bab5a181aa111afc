//! Cloud TPU nodes: records, formatting, lookup and command lines.
//!
//! - [`model`] - Parsed node records and status classification
//! - [`format`] - Fixed-width status lines
//! - [`lookup`] - Querying current node state
//! - [`commands`] - gcloud command lines for lifecycle operations

pub mod commands;
pub mod format;
pub mod lookup;
pub mod model;

pub use commands::CommandBuilder;
pub use format::{format_age, format_headers, format_line};
pub use lookup::{check_zone, GcloudLookup, SequenceLookup, TpuLookup};
pub use model::{Health, NodeState, StatusClass, Tpu};
