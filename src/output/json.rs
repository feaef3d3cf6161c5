//! Progress report persistence.
//!
//! Reports are stored as pretty-printed JSON so they can be diffed and
//! fed to a chart renderer as-is.

use crate::parser::schema::ProgressReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Write a report to `output_path`, creating missing parent directories
///
/// **Public** - used by the progress command
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, a directory, or an uncreatable parent
/// * `OutputError::SerializationFailed` - report could not be encoded
/// * `OutputError::WriteFailed` - file could not be written
pub fn write_report(report: &ProgressReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    ensure_writable(output_path)?;

    let encoded = report_to_string(report)?;
    fs::write(output_path, encoded.as_bytes())?;

    info!(
        "Wrote report with {} skill(s) over {} date(s) to {}",
        report.total_skills,
        report.cumulative.len(),
        output_path.display()
    );

    Ok(())
}

/// Encode a report as pretty JSON
pub fn report_to_string(report: &ProgressReport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(report).map_err(OutputError::SerializationFailed)
}

/// Load a report previously written by `write_report`
///
/// # Errors
/// * `OutputError::ReadFailed` - file missing or unreadable
/// * `OutputError::MalformedReport` - content is not a report
pub fn read_report(input_path: impl AsRef<Path>) -> Result<ProgressReport, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Loading report {}", input_path.display());

    let content = fs::read_to_string(input_path).map_err(OutputError::ReadFailed)?;
    serde_json::from_str(&content).map_err(OutputError::MalformedReport)
}

/// Reject empty paths and directories; create the parent if needed
fn ensure_writable(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            debug!("Creating report directory {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create {}: {}", parent.display(), e))
            })
        }
        _ => Ok(()),
    }
}
