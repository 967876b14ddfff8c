use crate::emotion::EmotionalState;
use crate::profile::UserProfile;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialisable copy of an engine's session state. Field names are stable for
/// downstream consumers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub history: Vec<EmotionalState>,
    /// Local date (`%Y-%m-%d`) to number of high or critical states recorded that day.
    pub crisis_patterns: BTreeMap<String, u32>,
    pub profile: Option<UserProfile>,
    pub export_timestamp: DateTime<Local>,
}

impl Snapshot {
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage() {
        let err = Snapshot::from_json("{ not json").expect_err("invalid");
        assert!(err.to_string().starts_with("snapshot is not valid JSON"));
    }

    #[test]
    fn history_entries_use_stable_field_names() {
        let json = r#"{
            "history": [{
                "emotion": "sadness",
                "intensity": 0.4,
                "confidence": 0.52,
                "timestamp": "2026-10-19T08:00:00+00:00",
                "crisis_level": "none",
                "context": {
                    "word_count": 2,
                    "has_questions": false,
                    "has_exclamations": false,
                    "time_of_day": 8,
                    "crisis_detected": false,
                    "medical_emergency": false
                }
            }],
            "crisis_patterns": { "2026-10-18": 2 },
            "profile": null,
            "export_timestamp": "2026-10-19T09:00:00+00:00"
        }"#;
        let snapshot = Snapshot::from_json(json).expect("valid snapshot");
        assert_eq!(snapshot.history.len(), 1);
        assert_eq!(snapshot.crisis_patterns.get("2026-10-18"), Some(&2));
        assert!(snapshot.profile.is_none());
    }
}
