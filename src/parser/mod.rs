//! Snapshot parsing and schema definitions.
//!
//! This module handles:
//! - Parsing raw JSON snapshots from the skills service
//! - Selecting one user's records
//! - Defining record and report schema

pub mod schema;
pub mod snapshot;

// Re-export main types
pub use schema::{
    BarChart, ChartData, CumulativePoint, CumulativeSeries, LineChart, Proficiency,
    ProficiencyHistogram, ProgressReport, SkillRecord,
};
pub use snapshot::{parse_snapshot, read_snapshot, Snapshot};
