//! Input records and output report schema definitions.
//!
//! `SkillRecord` mirrors what the skills service returns. The report
//! types define the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One "skill acquired" fact as delivered by the data service
///
/// Proficiency and date are kept as raw JSON; the aggregator validates
/// them so it can name the offending record. The profile form submits
/// proficiency as a string ("0".."2"), so both shapes reach us.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Opaque record identifier
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Owner reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Skill label (non-empty)
    pub skill: String,

    /// Raw proficiency level, expected to denote 0, 1 or 2
    #[serde(default)]
    pub proficiency: Value,

    /// Raw date the skill was gained, may carry a time of day
    #[serde(default, rename = "dateGained", alias = "date_gained")]
    pub date_gained: Value,
}

impl SkillRecord {
    pub fn new(
        skill: impl Into<String>,
        proficiency: impl Into<Value>,
        date_gained: impl Into<Value>,
    ) -> Self {
        Self {
            id: None,
            user: None,
            skill: skill.into(),
            proficiency: proficiency.into(),
            date_gained: date_gained.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Human-readable reference used in error messages
    pub fn describe(&self, index: usize) -> String {
        match &self.id {
            Some(id) => format!("{} ('{}')", id, self.skill),
            None => format!("#{} ('{}')", index, self.skill),
        }
    }
}

/// Proficiency level, ordered Beginner < Intermediate < Expert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Proficiency {
    Beginner = 0,
    Intermediate = 1,
    Expert = 2,
}

impl Proficiency {
    /// All levels in ascending order
    pub const ALL: [Proficiency; 3] = [
        Proficiency::Beginner,
        Proficiency::Intermediate,
        Proficiency::Expert,
    ];

    /// Read a level from raw JSON
    ///
    /// Integral numbers and numeric strings are accepted (`1`, `1.0`, `"1"`);
    /// anything else, including `1.5`, yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        let number = match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
            _ => None,
        }?;

        Proficiency::try_from(number).ok()
    }

    /// Ordinal label used on the bar chart axis
    pub fn label(self) -> &'static str {
        match self {
            Proficiency::Beginner => "0",
            Proficiency::Intermediate => "1",
            Proficiency::Expert => "2",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Expert => "Expert",
        }
    }
}

impl TryFrom<i64> for Proficiency {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Proficiency::Beginner),
            1 => Ok(Proficiency::Intermediate),
            2 => Ok(Proficiency::Expert),
            other => Err(other),
        }
    }
}

fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single point of the cumulative series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativePoint {
    /// UTC calendar date, serialized as YYYY-MM-DD
    pub date: NaiveDate,

    /// Skills gained up to and including `date`
    pub total: u64,
}

/// Running total of skills gained, one point per distinct date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CumulativeSeries {
    pub points: Vec<CumulativePoint>,
}

impl CumulativeSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Final cumulative value (0 for an empty series)
    pub fn total(&self) -> u64 {
        self.points.last().map(|p| p.total).unwrap_or(0)
    }

    /// Dates formatted as YYYY-MM-DD
    pub fn labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| p.date.format(crate::utils::config::DATE_FORMAT).to_string())
            .collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.total).collect()
    }
}

/// Count of records per proficiency level; every level is always present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProficiencyHistogram {
    pub beginner: u64,
    pub intermediate: u64,
    pub expert: u64,
}

impl ProficiencyHistogram {
    pub fn count(&self, level: Proficiency) -> u64 {
        match level {
            Proficiency::Beginner => self.beginner,
            Proficiency::Intermediate => self.intermediate,
            Proficiency::Expert => self.expert,
        }
    }

    pub(crate) fn increment(&mut self, level: Proficiency) {
        match level {
            Proficiency::Beginner => self.beginner += 1,
            Proficiency::Intermediate => self.intermediate += 1,
            Proficiency::Expert => self.expert += 1,
        }
    }

    /// (level, count) pairs in ascending level order
    pub fn iter(&self) -> impl Iterator<Item = (Proficiency, u64)> + '_ {
        Proficiency::ALL.iter().map(move |&level| (level, self.count(level)))
    }

    pub fn total(&self) -> u64 {
        self.beginner + self.intermediate + self.expert
    }
}

/// Line chart payload: one label per date, one cumulative value per label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineChart {
    pub label: String,
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

/// Bar chart payload: the three proficiency labels and their counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarChart {
    pub label: String,
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

/// Chart payloads handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub cumulative: LineChart,
    pub proficiency: BarChart,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// User the snapshot belongs to (if known)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Number of skill records aggregated
    pub total_skills: u64,

    /// Cumulative skills over time
    pub cumulative: CumulativeSeries,

    /// Skills per proficiency level
    pub proficiency: ProficiencyHistogram,

    /// Renderer-ready chart payloads
    pub charts: ChartData,

    /// Timestamp when report was generated
    pub generated_at: String,
}
