//! Count skill records per proficiency level.

use crate::parser::schema::{Proficiency, ProficiencyHistogram, SkillRecord};
use crate::utils::error::AggregateError;
use log::debug;

/// Resolve the proficiency level of one record
///
/// **Crate** - shared with `aggregate`
pub(crate) fn record_level(record: &SkillRecord, index: usize) -> Result<Proficiency, AggregateError> {
    Proficiency::from_json(&record.proficiency).ok_or_else(|| AggregateError::InvalidProficiency {
        record: record.describe(index),
        value: record.proficiency.to_string(),
    })
}

/// Build the proficiency histogram from skill records
///
/// **Public** - main entry point for the proficiency view
///
/// All three levels are present in the result, with 0 for levels
/// not seen in the input. Numeric strings count like numbers.
///
/// # Errors
/// * `AggregateError::InvalidProficiency` - first record outside 0..=2;
///   no partial histogram is returned
pub fn build_proficiency_histogram(
    records: &[SkillRecord],
) -> Result<ProficiencyHistogram, AggregateError> {
    let levels = records
        .iter()
        .enumerate()
        .map(|(index, record)| record_level(record, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(histogram_from_levels(&levels))
}

/// **Crate** - shared with `aggregate`
pub(crate) fn histogram_from_levels(levels: &[Proficiency]) -> ProficiencyHistogram {
    let mut histogram = ProficiencyHistogram::default();
    for level in levels {
        histogram.increment(*level);
    }

    debug!(
        "Proficiency histogram: beginner={} intermediate={} expert={}",
        histogram.beginner, histogram.intermediate, histogram.expert
    );

    histogram
}
