//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod progress;
pub mod utils;

// Re-export main command functions
pub use models::ProgressArgs;
pub use progress::{execute_progress, render_text_summary, validate_args};
pub use utils::{check_report, display_schema, display_version, validate_report_file};
