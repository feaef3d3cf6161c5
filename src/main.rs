//! Skill Progress CLI
//!
//! Turns a skill-record snapshot into a JSON progress report with
//! a cumulative timeline and a proficiency histogram.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use skill_progress::commands::{
    display_schema, display_version, execute_progress, validate_args, validate_report_file,
    ProgressArgs,
};
use skill_progress::utils::config::{DEFAULT_REPORT_PATH, USER_ENV_VAR};

/// Skill Progress - cumulative skill timelines and proficiency histograms
#[derive(Parser, Debug)]
#[command(name = "skill-progress")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a skill snapshot into a progress report
    Progress {
        /// Snapshot JSON file (record array, {"skills": [...]} or user -> records)
        #[arg(short, long)]
        input: PathBuf,

        /// User whose records are aggregated
        #[arg(short, long, env = USER_ENV_VAR)]
        user: Option<String>,

        /// Output path for JSON report
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a progress report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Progress {
            input,
            user,
            output,
            summary,
        } => {
            let args = ProgressArgs {
                input,
                user_id: user,
                output_json: output,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_progress(&args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
