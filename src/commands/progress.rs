//! Progress command implementation.
//!
//! The progress command:
//! 1. Reads the skill snapshot
//! 2. Selects the user's records
//! 3. Aggregates both views
//! 4. Writes the JSON report

use super::models::ProgressArgs;
use crate::aggregator::{aggregate, calculate_summary, ProgressSummary};
use crate::output::{build_report, write_report};
use crate::parser::read_snapshot;
use crate::parser::schema::ProgressReport;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the progress command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written
///
/// # Errors
/// * Unreadable or malformed snapshot
/// * Invalid skill records (the whole run is aborted)
/// * File write errors
pub fn execute_progress(args: &ProgressArgs) -> Result<ProgressReport> {
    let start_time = Instant::now();

    info!("Building skill progress from: {}", args.input.display());

    info!("Step 1/4: Reading snapshot...");
    let snapshot = read_snapshot(&args.input)
        .with_context(|| format!("Failed to read snapshot {}", args.input.display()))?;

    info!("Step 2/4: Selecting records...");
    let records = snapshot
        .records_for(args.user_id.as_deref())
        .context("Failed to select skill records")?;

    debug!("Selected {} record(s) for user {}",
           records.len(),
           args.user_id.as_deref().unwrap_or("<all>"));

    info!("Step 3/4: Aggregating...");
    let progress = aggregate(&records).context("Failed to aggregate skill records")?;

    let summary = calculate_summary(&progress);
    info!("Progress: {}", summary.summary());

    info!("Step 4/4: Writing report...");
    let report = build_report(args.user_id.as_deref(), &progress);
    write_report(&report, &args.output_json)
        .context("Failed to write progress report")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("{}", render_text_summary(&report, &summary));
    }

    let elapsed = start_time.elapsed();
    info!("Progress completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Render the text summary printed with `--summary`
///
/// **Public** - separated from printing for testing
pub fn render_text_summary(report: &ProgressReport, summary: &ProgressSummary) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();

    out.push_str(&format!("{}\nSKILL PROGRESS\n{}\n", rule, rule));
    if let Some(user) = &report.user_id {
        out.push_str(&format!("User:         {}\n", user));
    }
    out.push_str(&format!("Total skills: {}\n", report.total_skills));
    out.push_str(&format!("Active days:  {}\n", summary.active_days));
    if let Some(day) = summary.busiest_day {
        out.push_str(&format!("Busiest day:  {} (+{})\n", day, summary.busiest_day_count));
    }

    out.push_str("\nCumulative skills:\n");
    for point in &report.cumulative.points {
        out.push_str(&format!("  {}  {:>5}\n", point.date, point.total));
    }

    out.push_str("\nBy proficiency:\n");
    for (level, count) in report.proficiency.iter() {
        out.push_str(&format!("  {} {:<12} {:>5}\n", level.label(), level.name(), count));
    }
    out.push_str(&rule);

    out
}

/// Validate progress arguments
///
/// **Public** - can be called before execute_progress for early validation
pub fn validate_args(args: &ProgressArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input snapshot path cannot be empty");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if let Some(user) = &args.user_id {
        if user.trim().is_empty() {
            anyhow::bail!("User id cannot be blank");
        }
    }

    Ok(())
}
