use std::path::PathBuf;
use crate::utils::config::DEFAULT_REPORT_PATH;

/// Arguments for the progress command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ProgressArgs {
    /// Snapshot file with skill records
    pub input: PathBuf,

    /// User whose records are aggregated (None = whole snapshot)
    pub user_id: Option<String>,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ProgressArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("skills.json"),
            user_id: None,
            output_json: PathBuf::from(DEFAULT_REPORT_PATH),
            print_summary: false,
        }
    }
}
