//! Summary statistics over aggregated skill progress.
//!
//! Used for logging and for the text summary printed by the CLI.

use super::SkillProgress;
use crate::parser::schema::Proficiency;
use chrono::NaiveDate;
use log::debug;

/// Calculate summary statistics from aggregated progress
///
/// **Public** - provides summary statistics
///
/// The busiest day is the date with the largest single-day gain;
/// ties go to the earliest date.
pub fn calculate_summary(progress: &SkillProgress) -> ProgressSummary {
    let points = &progress.cumulative.points;
    if points.is_empty() {
        return ProgressSummary::default();
    }

    let mut busiest: Option<(NaiveDate, u64)> = None;
    let mut previous = 0u64;
    for point in points {
        let gained = point.total - previous;
        previous = point.total;

        if busiest.map_or(true, |(_, best)| gained > best) {
            busiest = Some((point.date, gained));
        }
    }

    let summary = ProgressSummary {
        total_skills: progress.cumulative.total(),
        active_days: points.len(),
        first_date: points.first().map(|p| p.date),
        last_date: points.last().map(|p| p.date),
        busiest_day: busiest.map(|(date, _)| date),
        busiest_day_count: busiest.map(|(_, count)| count).unwrap_or(0),
        top_level: top_level(progress),
    };

    debug!("Summary: {}", summary.summary());

    summary
}

/// Level with the most records; ties go to the higher level
///
/// **Private** - internal helper for calculate_summary
fn top_level(progress: &SkillProgress) -> Option<Proficiency> {
    progress
        .proficiency
        .iter()
        .filter(|(_, count)| *count > 0)
        .max_by_key(|(level, count)| (*count, *level))
        .map(|(level, _)| level)
}

/// Skill progress summary statistics
///
/// **Public** - returned from calculate_summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Total skills gained
    pub total_skills: u64,

    /// Number of distinct dates with at least one skill
    pub active_days: usize,

    /// Earliest date in the series
    pub first_date: Option<NaiveDate>,

    /// Latest date in the series
    pub last_date: Option<NaiveDate>,

    /// Date with the largest single-day gain
    pub busiest_day: Option<NaiveDate>,

    /// Skills gained on the busiest day
    pub busiest_day_count: u64,

    /// Most common proficiency level
    pub top_level: Option<Proficiency>,
}

impl ProgressSummary {
    /// Days covered from first to last date, inclusive
    pub fn span_days(&self) -> i64 {
        match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => (last - first).num_days() + 1,
            _ => 0,
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let fmt_date = |d: Option<NaiveDate>| {
            d.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
        };

        format!(
            "Skills: {} | Active days: {} | From: {} | To: {} | Busiest: {} ({}) | Top level: {}",
            self.total_skills,
            self.active_days,
            fmt_date(self.first_date),
            fmt_date(self.last_date),
            fmt_date(self.busiest_day),
            self.busiest_day_count,
            self.top_level.map(|l| l.name()).unwrap_or("-"),
        )
    }
}
