//! Skill Progress
//!
//! Aggregates a snapshot of "skill acquired" records into two
//! chartable views: a cumulative skills-over-time series and a
//! histogram of skills per proficiency level.
//!
//! This crate provides the core implementation for the
//! `skill-progress` CLI tool.
//!
//! ## Getting Started
//!
//! ```
//! use skill_progress::aggregator::aggregate;
//! use skill_progress::parser::SkillRecord;
//!
//! let records = vec![
//!     SkillRecord::new("Rust", 0, "2024-01-01"),
//!     SkillRecord::new("SQL", 1, "2024-01-03"),
//! ];
//! let progress = aggregate(&records).unwrap();
//! assert_eq!(progress.cumulative.values(), vec![1, 2]);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
