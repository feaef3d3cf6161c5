//! Chart payloads and report assembly.
//!
//! Turns aggregated views into plain label/value arrays for the renderer.
//! Nothing here knows about colors or layout.

use crate::aggregator::SkillProgress;
use crate::parser::schema::{
    BarChart, ChartData, CumulativeSeries, LineChart, Proficiency, ProficiencyHistogram,
    ProgressReport,
};
use crate::utils::config::{CUMULATIVE_CHART_LABEL, PROFICIENCY_CHART_LABEL, SCHEMA_VERSION};
use chrono::{SecondsFormat, Utc};

/// Line chart payload from the cumulative series
pub fn line_chart(series: &CumulativeSeries) -> LineChart {
    LineChart {
        label: CUMULATIVE_CHART_LABEL.to_string(),
        labels: series.labels(),
        data: series.values(),
    }
}

/// Bar chart payload from the histogram, always three bars
pub fn bar_chart(histogram: &ProficiencyHistogram) -> BarChart {
    BarChart {
        label: PROFICIENCY_CHART_LABEL.to_string(),
        labels: Proficiency::ALL.iter().map(|l| l.label().to_string()).collect(),
        data: histogram.iter().map(|(_, count)| count).collect(),
    }
}

/// Assemble the JSON report for one user's progress
///
/// **Public** - used by the progress command
pub fn build_report(user_id: Option<&str>, progress: &SkillProgress) -> ProgressReport {
    ProgressReport {
        version: SCHEMA_VERSION.to_string(),
        user_id: user_id.map(str::to_string),
        total_skills: progress.proficiency.total(),
        cumulative: progress.cumulative.clone(),
        proficiency: progress.proficiency,
        charts: ChartData {
            cumulative: line_chart(&progress.cumulative),
            proficiency: bar_chart(&progress.proficiency),
        },
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::parser::schema::SkillRecord;

    #[test]
    fn test_bar_chart_of_empty_histogram() {
        let chart = bar_chart(&ProficiencyHistogram::default());

        assert_eq!(chart.labels, vec!["0", "1", "2"]);
        assert_eq!(chart.data, vec![0, 0, 0]);
        assert_eq!(chart.label, "Skills by Proficiency");
    }

    #[test]
    fn test_line_chart_labels_match_data() {
        let records = vec![
            SkillRecord::new("Rust", 0, "2024-01-03"),
            SkillRecord::new("Go", 1, "2024-01-01"),
        ];
        let progress = aggregate(&records).unwrap();

        let chart = line_chart(&progress.cumulative);

        assert_eq!(chart.labels, vec!["2024-01-01", "2024-01-03"]);
        assert_eq!(chart.data, vec![1, 2]);
    }

    #[test]
    fn test_build_report() {
        let records = vec![SkillRecord::new("Rust", 2, "2024-01-01")];
        let progress = aggregate(&records).unwrap();

        let report = build_report(Some("u1"), &progress);

        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.user_id.as_deref(), Some("u1"));
        assert_eq!(report.total_skills, 1);
        assert_eq!(report.charts.proficiency.data, vec![0, 0, 1]);
        assert!(report.generated_at.ends_with('Z'));
    }
}
