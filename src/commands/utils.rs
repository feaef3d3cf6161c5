use anyhow::{ensure, Context, Result};
use std::path::Path;
use crate::output::read_report;
use crate::parser::schema::{Proficiency, ProgressReport};
use crate::utils::config::SCHEMA_VERSION;

/// Validate a progress report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Invalid report {}", file_path.display()))?;

    check_report(&report)
        .with_context(|| format!("Inconsistent report {}", file_path.display()))?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  User: {}", report.user_id.as_deref().unwrap_or("-"));
    println!("  Total Skills: {}", report.total_skills);
    println!("  Dates: {}", report.cumulative.len());
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Check the invariants a freshly built report always satisfies
///
/// Dates strictly ascend, totals never decrease, every total agrees
/// with `total_skills`, and chart payloads mirror the views they came from.
pub fn check_report(report: &ProgressReport) -> Result<()> {
    for pair in report.cumulative.points.windows(2) {
        ensure!(
            pair[0].date < pair[1].date,
            "Cumulative dates out of order: {} then {}",
            pair[0].date,
            pair[1].date
        );
        ensure!(
            pair[0].total <= pair[1].total,
            "Cumulative total drops on {}: {} -> {}",
            pair[1].date,
            pair[0].total,
            pair[1].total
        );
    }

    ensure!(
        report.cumulative.total() == report.total_skills
            && report.proficiency.total() == report.total_skills,
        "Report totals disagree: total_skills={}, cumulative={}, proficiency={}",
        report.total_skills,
        report.cumulative.total(),
        report.proficiency.total()
    );

    let line = &report.charts.cumulative;
    ensure!(
        line.labels.len() == line.data.len(),
        "Line chart has {} label(s) but {} value(s)",
        line.labels.len(),
        line.data.len()
    );
    ensure!(
        line.labels == report.cumulative.labels() && line.data == report.cumulative.values(),
        "Line chart does not match the cumulative series"
    );

    let bar = &report.charts.proficiency;
    ensure!(
        bar.labels.len() == Proficiency::ALL.len() && bar.data.len() == Proficiency::ALL.len(),
        "Bar chart must have 3 labels and 3 values, found {} and {}",
        bar.labels.len(),
        bar.data.len()
    );
    let counts: Vec<u64> = report.proficiency.iter().map(|(_, count)| count).collect();
    ensure!(
        bar.data == counts,
        "Bar chart does not match the proficiency histogram"
    );

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Skill Progress Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  user_id: string?           - User the records belong to");
        println!("  total_skills: number       - Number of skill records aggregated");
        println!("  cumulative: array          - Cumulative skills over time");
        println!("    date: string             - UTC calendar date (YYYY-MM-DD)");
        println!("    total: number            - Skills gained up to this date");
        println!("  proficiency: object        - Skills per proficiency level");
        println!("    beginner: number         - Level 0");
        println!("    intermediate: number     - Level 1");
        println!("    expert: number           - Level 2");
        println!("  charts: object             - Renderer-ready payloads");
        println!("    cumulative: object       - label, labels[], data[]");
        println!("    proficiency: object      - label, labels[3], data[3]");
        println!("  generated_at: string       - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Skill Progress v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Cumulative skill timelines and proficiency histograms.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::output::build_report;
    use crate::parser::schema::SkillRecord;

    fn sample_report() -> ProgressReport {
        let records = vec![
            SkillRecord::new("Rust", 0, "2024-01-01"),
            SkillRecord::new("Go", 1, "2024-01-02"),
            SkillRecord::new("SQL", 2, "2024-01-04"),
        ];
        build_report(None, &aggregate(&records).unwrap())
    }

    #[test]
    fn test_built_report_passes() {
        assert!(check_report(&sample_report()).is_ok());
    }

    #[test]
    fn test_reordered_series_fails() {
        let mut report = sample_report();
        report.cumulative.points.swap(0, 2);

        let err = check_report(&report).unwrap_err();
        assert!(err.to_string().contains("out of order"));
    }

    #[test]
    fn test_decreasing_total_fails() {
        let mut report = sample_report();
        report.cumulative.points[1].total = 0;

        let err = check_report(&report).unwrap_err();
        assert!(err.to_string().contains("drops"));
    }

    #[test]
    fn test_line_chart_length_mismatch_fails() {
        let mut report = sample_report();
        report.charts.cumulative.data.pop();

        assert!(check_report(&report).is_err());
    }

    #[test]
    fn test_bar_chart_needs_three_entries() {
        let mut report = sample_report();
        report.charts.proficiency.labels.truncate(2);

        let err = check_report(&report).unwrap_err();
        assert!(err.to_string().contains("3 labels"));
    }
}
