//! Review types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A completed review of one assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// When the review was recorded.
    pub created_at: DateTime<Utc>,
    /// The assignment that was reviewed.
    #[serde(default)]
    pub assignment_id: u64,
    /// The subject that was reviewed.
    pub subject_id: u64,
    /// SRS stage before the review.
    pub starting_srs_stage: u8,
    /// SRS stage after the review.
    pub ending_srs_stage: u8,
    /// Number of wrong meaning answers.
    pub incorrect_meaning_answers: u32,
    /// Number of wrong reading answers.
    pub incorrect_reading_answers: u32,
    /// Fields not modelled above, such as the SRS id.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Review {
    /// Whether the review was answered without mistakes.
    pub fn is_correct(&self) -> bool {
        self.incorrect_meaning_answers == 0 && self.incorrect_reading_answers == 0
    }
}

/// Body for [`ReviewActions::create()`](crate::actions::ReviewActions::create).
///
/// # Example
///
/// ```
/// use wanikani::CreateReview;
///
/// let review = CreateReview::new(1, 0, 1);
/// let body = serde_json::to_value(&review).unwrap();
/// assert_eq!(body, serde_json::json!({
///     "assignment_id": 1,
///     "incorrect_meaning_answers": 0,
///     "incorrect_reading_answers": 1
/// }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateReview {
    /// The assignment being reviewed.
    pub assignment_id: u64,
    /// Number of wrong meaning answers.
    pub incorrect_meaning_answers: u32,
    /// Number of wrong reading answers.
    pub incorrect_reading_answers: u32,
    /// Backdate the review. Defaults to now on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CreateReview {
    /// Create a review for an assignment with the given mistake counts.
    pub fn new(
        assignment_id: u64,
        incorrect_meaning_answers: u32,
        incorrect_reading_answers: u32,
    ) -> Self {
        Self {
            assignment_id,
            incorrect_meaning_answers,
            incorrect_reading_answers,
            created_at: None,
        }
    }

    /// Record the review as having happened at `at`.
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }
}
