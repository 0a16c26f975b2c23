//! Level progression types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The user's progress through one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelProgression {
    /// When the progression was created.
    pub created_at: DateTime<Utc>,
    /// The level number.
    pub level: u8,
    /// When the level was unlocked.
    #[serde(default)]
    pub unlocked_at: Option<DateTime<Utc>>,
    /// When the first lesson of the level was completed.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// When enough kanji were passed to level up.
    #[serde(default)]
    pub passed_at: Option<DateTime<Utc>>,
    /// When every subject of the level was burned.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// When the level was abandoned by a reset.
    #[serde(default)]
    pub abandoned_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LevelProgression {
    /// Whether the level has been passed and not abandoned.
    pub fn is_passed(&self) -> bool {
        self.passed_at.is_some() && self.abandoned_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_level_progression() {
        let progression: LevelProgression = serde_json::from_value(serde_json::json!({
            "created_at": "2017-03-30T08:21:51.439918Z",
            "level": 1,
            "unlocked_at": "2017-03-30T08:21:51.439918Z",
            "started_at": "2017-03-30T08:21:51.439918Z",
            "passed_at": null,
            "completed_at": null,
            "abandoned_at": null
        }))
        .unwrap();

        assert_eq!(progression.level, 1);
        assert!(progression.unlocked_at.is_some());
        assert!(!progression.is_passed());
    }
}
