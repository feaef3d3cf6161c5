//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised by the aggregator when a record fails validation
///
/// Every variant names the offending record so the caller can point
/// the user at it. Aggregation never returns a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("Malformed dateGained for record {record}: {value}")]
    MalformedDate { record: String, value: String },

    #[error("Invalid proficiency for record {record}: {value} (expected 0, 1 or 2)")]
    InvalidProficiency { record: String, value: String },
}

/// Errors that can occur while decoding a skill snapshot
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot format: {0}")]
    InvalidFormat(String),

    #[error("Invalid skill record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("No skill records for user: {0}")]
    UnknownUser(String),

    #[error("Snapshot holds several users, pick one of: {}", .0.join(", "))]
    AmbiguousUser(Vec<String>),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Malformed report JSON: {0}")]
    MalformedReport(#[source] serde_json::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
