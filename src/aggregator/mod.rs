//! Aggregation of skill records into chartable views.
//!
//! This module transforms a snapshot of skill records into:
//! - A cumulative skills-over-time series
//! - A histogram of skills per proficiency level
//! - Summary statistics
//!
//! Every operation is a pure function over the snapshot. Invalid records
//! abort the whole call with an `AggregateError`; nothing is dropped silently.

pub mod cumulative;
pub mod histogram;
pub mod metrics;

use crate::parser::schema::{CumulativeSeries, ProficiencyHistogram, SkillRecord};
use crate::utils::error::AggregateError;
use log::debug;

// Re-export main types and functions
pub use cumulative::{build_cumulative_series, normalize_date};
pub use histogram::build_proficiency_histogram;
pub use metrics::{calculate_summary, ProgressSummary};

/// Both derived views of one snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillProgress {
    pub cumulative: CumulativeSeries,
    pub proficiency: ProficiencyHistogram,
}

/// Validate every record once and build both views
///
/// **Public** - main entry point used by commands
///
/// Records are checked in input order; for a record that is invalid in
/// both ways the proficiency error is reported.
///
/// # Errors
/// * `AggregateError::InvalidProficiency` - proficiency outside 0..=2
/// * `AggregateError::MalformedDate` - missing or unparsable date
pub fn aggregate(records: &[SkillRecord]) -> Result<SkillProgress, AggregateError> {
    debug!("Aggregating {} skill record(s)", records.len());

    let mut levels = Vec::with_capacity(records.len());
    let mut dates = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        levels.push(histogram::record_level(record, index)?);
        dates.push(cumulative::record_date(record, index)?);
    }

    Ok(SkillProgress {
        cumulative: cumulative::cumulative_from_dates(&dates),
        proficiency: histogram::histogram_from_levels(&levels),
    })
}
