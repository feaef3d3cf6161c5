//! Output builders and writers for progress reports.
//!
//! This module handles:
//! - Chart payloads (labels + numeric series)
//! - JSON progress reports on disk

pub mod chart;
pub mod json;

// Re-export main functions
pub use chart::{bar_chart, build_report, line_chart};
pub use json::{read_report, report_to_string, write_report};
