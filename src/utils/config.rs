//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default path of the JSON progress report
pub const DEFAULT_REPORT_PATH: &str = "progress.json";

/// Environment variable that may carry the user id for `progress`
pub const USER_ENV_VAR: &str = "SKILL_PROGRESS_USER";

// Wrapper key accepted around a record array: {"skills": [...]}
pub const SNAPSHOT_WRAPPER_KEY: &str = "skills";

// Offset timestamps RFC 3339 does not cover (no seconds: 2024-01-01T10:00Z).
// Tried after RFC 3339.
pub const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z"];

// Timestamps without an offset are read as UTC.
// Tried in order after RFC 3339.
pub const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Calendar date format used for bucket keys and chart labels
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Chart dataset labels handed to the renderer
pub const CUMULATIVE_CHART_LABEL: &str = "Cumulative Skills Gained Over Time";
pub const PROFICIENCY_CHART_LABEL: &str = "Skills by Proficiency";
