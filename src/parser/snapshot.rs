//! Snapshot parser for skill records returned by the data service.
//!
//! Parses raw JSON into structured records and selects the records
//! belonging to one user. Structural problems are reported here;
//! proficiency and date validation belongs to the aggregator.

use super::schema::SkillRecord;
use crate::utils::config::SNAPSHOT_WRAPPER_KEY;
use crate::utils::error::ParseError;
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::Path;

/// Decoded snapshot of skill records
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    /// Flat record list, as returned by `GET /api/skills/?userId=...`
    Records(Vec<SkillRecord>),

    /// Records keyed by user id
    ByUser(BTreeMap<String, Vec<SkillRecord>>),
}

impl Snapshot {
    /// Total number of records across all users
    pub fn record_count(&self) -> usize {
        match self {
            Snapshot::Records(records) => records.len(),
            Snapshot::ByUser(map) => map.values().map(Vec::len).sum(),
        }
    }

    /// Select the records of one user
    ///
    /// **Public** - used by the progress command before aggregation
    ///
    /// # Errors
    /// * `ParseError::UnknownUser` - keyed snapshot without that user
    /// * `ParseError::AmbiguousUser` - keyed snapshot with several users and no user given
    pub fn records_for(&self, user_id: Option<&str>) -> Result<Vec<SkillRecord>, ParseError> {
        match (self, user_id) {
            (Snapshot::Records(records), None) => Ok(records.clone()),
            (Snapshot::Records(records), Some(user)) => Ok(records
                .iter()
                .filter(|r| r.user.as_deref().map_or(true, |owner| owner == user))
                .cloned()
                .collect()),
            (Snapshot::ByUser(map), Some(user)) => map
                .get(user)
                .cloned()
                .ok_or_else(|| ParseError::UnknownUser(user.to_string())),
            (Snapshot::ByUser(map), None) => {
                if map.len() == 1 {
                    Ok(map.values().next().cloned().unwrap_or_default())
                } else {
                    Err(ParseError::AmbiguousUser(map.keys().cloned().collect()))
                }
            }
        }
    }
}

/// Parse a raw snapshot document
///
/// **Public** - main entry point for parsing
///
/// Accepts a bare record array, `{"skills": [...]}`, or an object
/// mapping user id to a record array.
///
/// # Errors
/// * `ParseError::InvalidFormat` - document is not an array or object
/// * `ParseError::InvalidRecord` - a record is structurally invalid
pub fn parse_snapshot(raw: &serde_json::Value) -> Result<Snapshot, ParseError> {
    match raw {
        serde_json::Value::Array(items) => {
            debug!("Snapshot is a flat record array");
            parse_records_array(items).map(Snapshot::Records)
        }

        serde_json::Value::Object(obj) => {
            if let Some(wrapped) = obj.get(SNAPSHOT_WRAPPER_KEY) {
                let items = wrapped.as_array().ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "'{}' must be an array of records",
                        SNAPSHOT_WRAPPER_KEY
                    ))
                })?;
                debug!("Snapshot wraps records under '{}'", SNAPSHOT_WRAPPER_KEY);
                return parse_records_array(items).map(Snapshot::Records);
            }

            let mut by_user = BTreeMap::new();
            for (user, value) in obj {
                let items = value.as_array().ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "Records for user '{}' must be an array",
                        user
                    ))
                })?;
                by_user.insert(user.clone(), parse_records_array(items)?);
            }
            debug!("Snapshot keyed by {} user(s)", by_user.len());
            Ok(Snapshot::ByUser(by_user))
        }

        _ => Err(ParseError::InvalidFormat(
            "Snapshot must be a JSON array or object".to_string(),
        )),
    }
}

/// Read and parse a snapshot file
///
/// **Public** - convenience wrapper used by commands
pub fn read_snapshot(input_path: impl AsRef<Path>) -> Result<Snapshot, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Reading snapshot from: {}", input_path.display());

    let content = std::fs::read_to_string(input_path)?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;
    let snapshot = parse_snapshot(&raw)?;

    info!(
        "Loaded {} skill record(s) from {}",
        snapshot.record_count(),
        input_path.display()
    );

    Ok(snapshot)
}

/// Parse array of skill records
///
/// **Private** - internal parsing logic
fn parse_records_array(items: &[serde_json::Value]) -> Result<Vec<SkillRecord>, ParseError> {
    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            return Err(ParseError::InvalidRecord {
                index,
                reason: "expected a JSON object".to_string(),
            });
        }

        let record = serde_json::from_value::<SkillRecord>(item.clone()).map_err(|e| {
            ParseError::InvalidRecord {
                index,
                reason: e.to_string(),
            }
        })?;

        if record.skill.trim().is_empty() {
            return Err(ParseError::InvalidRecord {
                index,
                reason: "skill label is empty".to_string(),
            });
        }

        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_flat_array() {
        let raw = json!([
            {"_id": "a1", "user": "u1", "skill": "Rust", "proficiency": 1, "dateGained": "2024-01-01"},
            {"skill": "SQL", "proficiency": 0, "dateGained": "2024-01-02T08:00:00.000Z"}
        ]);

        let snapshot = parse_snapshot(&raw).unwrap();
        assert_eq!(snapshot.record_count(), 2);

        let records = snapshot.records_for(None).unwrap();
        assert_eq!(records[0].id.as_deref(), Some("a1"));
        assert_eq!(records[1].date_gained, json!("2024-01-02T08:00:00.000Z"));
    }

    #[test]
    fn test_parse_wrapped_array() {
        let raw = json!({"skills": [{"skill": "Go", "proficiency": 2, "dateGained": "2024-03-01"}]});
        let snapshot = parse_snapshot(&raw).unwrap();
        assert!(matches!(snapshot, Snapshot::Records(ref r) if r.len() == 1));
    }

    #[test]
    fn test_missing_date_is_not_a_parse_error() {
        let raw = json!([{"skill": "Go", "proficiency": 2}]);
        let records = parse_snapshot(&raw).unwrap().records_for(None).unwrap();
        assert!(records[0].date_gained.is_null());
    }

    #[test]
    fn test_rejects_scalar_document() {
        assert!(matches!(
            parse_snapshot(&json!(42)),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_empty_skill() {
        let raw = json!([{"skill": "  ", "proficiency": 0, "dateGained": "2024-01-01"}]);
        assert!(matches!(
            parse_snapshot(&raw),
            Err(ParseError::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_wrong_typed_fields_reach_the_aggregator() {
        let raw = json!([
            {"skill": "Rust", "proficiency": "1", "dateGained": "2024-01-01"},
            {"skill": "Go", "proficiency": 1.5, "dateGained": 1704067200000i64},
            {"skill": "SQL"}
        ]);

        let records = parse_snapshot(&raw).unwrap().records_for(None).unwrap();
        assert_eq!(records[0].proficiency, json!("1"));
        assert_eq!(records[1].proficiency, json!(1.5));
        assert_eq!(records[1].date_gained, json!(1704067200000i64));
        assert!(records[2].proficiency.is_null());
    }

    #[test]
    fn test_rejects_missing_skill() {
        let raw = json!([{"proficiency": 0, "dateGained": "2024-01-01"}]);
        assert!(matches!(
            parse_snapshot(&raw),
            Err(ParseError::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_records_for_keeps_unowned_records() {
        let snapshot = Snapshot::Records(vec![
            SkillRecord::new("Rust", 0, "2024-01-01").with_user("u1"),
            SkillRecord::new("Go", 1, "2024-01-02").with_user("u2"),
            SkillRecord::new("SQL", 2, "2024-01-03"),
        ]);

        let records = snapshot.records_for(Some("u2")).unwrap();
        let skills: Vec<&str> = records.iter().map(|r| r.skill.as_str()).collect();
        assert_eq!(skills, vec!["Go", "SQL"]);
        assert_eq!(snapshot.records_for(None).unwrap().len(), 3);
    }

    #[test]
    fn test_records_for_filters_flat_array_by_owner() {
        let raw = json!([
            {"user": "u1", "skill": "Rust", "proficiency": 0, "dateGained": "2024-01-01"},
            {"user": "u2", "skill": "Go", "proficiency": 0, "dateGained": "2024-01-01"},
            {"skill": "SQL", "proficiency": 0, "dateGained": "2024-01-01"}
        ]);
        let records = parse_snapshot(&raw).unwrap().records_for(Some("u1")).unwrap();
        let skills: Vec<&str> = records.iter().map(|r| r.skill.as_str()).collect();
        assert_eq!(skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_records_for_keyed_snapshot() {
        let raw = json!({
            "u1": [{"skill": "Rust", "proficiency": 0, "dateGained": "2024-01-01"}],
            "u2": []
        });
        let snapshot = parse_snapshot(&raw).unwrap();

        assert_eq!(snapshot.records_for(Some("u1")).unwrap().len(), 1);
        assert!(snapshot.records_for(Some("u2")).unwrap().is_empty());
        assert!(matches!(
            snapshot.records_for(Some("u3")),
            Err(ParseError::UnknownUser(_))
        ));
        match snapshot.records_for(None) {
            Err(ParseError::AmbiguousUser(users)) => assert_eq!(users, vec!["u1", "u2"]),
            other => panic!("expected AmbiguousUser, got {:?}", other),
        }
    }

    #[test]
    fn test_single_user_snapshot_needs_no_user() {
        let raw = json!({"u1": [{"skill": "Rust", "proficiency": 0, "dateGained": "2024-01-01"}]});
        let records = parse_snapshot(&raw).unwrap().records_for(None).unwrap();
        assert_eq!(records.len(), 1);
    }
}
