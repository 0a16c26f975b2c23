//! Assignment types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::SubjectType;

/// The user's progress on a single subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// When the assignment was created.
    pub created_at: DateTime<Utc>,
    /// The subject this assignment tracks.
    pub subject_id: u64,
    /// The kind of subject.
    pub subject_type: SubjectType,
    /// Current SRS stage (0 = lesson, 9 = burned).
    pub srs_stage: u8,
    /// Human-readable SRS stage name. Only returned by older revisions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srs_stage_name: Option<String>,
    /// When the subject became available for lessons.
    #[serde(default)]
    pub unlocked_at: Option<DateTime<Utc>>,
    /// When the lesson was completed.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// When the assignment first reached Guru.
    #[serde(default)]
    pub passed_at: Option<DateTime<Utc>>,
    /// When the assignment was burned.
    #[serde(default)]
    pub burned_at: Option<DateTime<Utc>>,
    /// When the next review becomes available.
    #[serde(default)]
    pub available_at: Option<DateTime<Utc>>,
    /// When a burned assignment was resurrected.
    #[serde(default)]
    pub resurrected_at: Option<DateTime<Utc>>,
    /// Whether the assignment has ever reached Guru.
    #[serde(default)]
    pub passed: bool,
    /// Whether the assignment was resurrected.
    #[serde(default)]
    pub resurrected: bool,
    /// Whether the subject has been hidden from the curriculum.
    #[serde(default)]
    pub hidden: bool,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields of an assignment that can be changed with
/// [`AssignmentActions::update()`](crate::actions::AssignmentActions::update).
///
/// Only the fields that are set are sent.
///
/// # Example
///
/// ```
/// use wanikani::AssignmentUpdate;
///
/// let update = AssignmentUpdate::new().hidden(true);
/// let body = serde_json::to_value(&update).unwrap();
/// assert_eq!(body, serde_json::json!({"data": {"hidden": true}}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignmentUpdate {
    data: AssignmentPatch,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct AssignmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    srs_stage: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hidden: Option<bool>,
}

impl AssignmentUpdate {
    /// Create an update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lesson completion time.
    pub fn started_at(mut self, at: DateTime<Utc>) -> Self {
        self.data.started_at = Some(at);
        self
    }

    /// Set the SRS stage.
    pub fn srs_stage(mut self, stage: u8) -> Self {
        self.data.srs_stage = Some(stage);
        self
    }

    /// Hide or unhide the assignment.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.data.hidden = Some(hidden);
        self
    }
}
