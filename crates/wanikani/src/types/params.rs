//! Filter and pagination parameters for collection endpoints.
//!
//! Every field is optional; unset fields are omitted from the query string.
//! List-valued filters are sent comma-separated.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::SubjectType;

/// Cursor-based pagination accepted by every collection endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaginationParams {
    /// Return items after this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_after_id: Option<u64>,
    /// Return items before this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_before_id: Option<u64>,
    /// Return items after this cursor (older revisions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_after: Option<String>,
    /// Return items before this cursor (older revisions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_before: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Filters for [`AssignmentActions::list()`](crate::actions::AssignmentActions::list).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignmentsParams {
    /// Only assignments available after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_after: Option<DateTime<Utc>>,
    /// Only assignments available before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_before: Option<DateTime<Utc>>,
    /// Only burned (or unburned) assignments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burned: Option<bool>,
    /// Only hidden (or visible) assignments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Only these assignment ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    /// Only assignments ready for lessons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immediately_available_for_lessons: Option<bool>,
    /// Only assignments ready for review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immediately_available_for_review: Option<bool>,
    /// Only assignments currently in the review queue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_review: Option<bool>,
    /// Only assignments for subjects at these levels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<u8>>,
    /// Only assignments at these SRS stages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srs_stages: Option<Vec<u8>>,
    /// Only started (or unstarted) assignments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<bool>,
    /// Only assignments for these subjects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_ids: Option<Vec<u64>>,
    /// Only assignments for these subject types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_types: Option<Vec<SubjectType>>,
    /// Only unlocked (or locked) assignments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked: Option<bool>,
    /// Only assignments updated after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime<Utc>>,
    /// Pagination.
    #[serde(flatten)]
    pub page: PaginationParams,
}

/// Filters for [`LevelProgressionActions::list()`](crate::actions::LevelProgressionActions::list).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LevelProgressionsParams {
    /// Only these level progression ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    /// Only progressions updated after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime<Utc>>,
    /// Pagination.
    #[serde(flatten)]
    pub page: PaginationParams,
}

/// Filters for [`ReviewActions::list()`](crate::actions::ReviewActions::list).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewsParams {
    /// Only reviews of these assignments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_ids: Option<Vec<u64>>,
    /// Only these review ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    /// Only reviews of these subjects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_ids: Option<Vec<u64>>,
    /// Only reviews of these subject types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_types: Option<Vec<SubjectType>>,
    /// Only reviews updated after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime<Utc>>,
    /// Pagination.
    #[serde(flatten)]
    pub page: PaginationParams,
}

/// Filters for [`SubjectActions::list()`](crate::actions::SubjectActions::list).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubjectsParams {
    /// Only hidden (or visible) subjects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Only these subject ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    /// Only subjects at these levels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<u8>>,
    /// Only subjects with these slugs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slugs: Option<Vec<String>>,
    /// Only subjects of these types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<SubjectType>>,
    /// Only subjects updated after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime<Utc>>,
    /// Pagination.
    #[serde(flatten)]
    pub page: PaginationParams,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::query::QueryParams;

    #[test]
    fn test_default_params_are_empty() {
        let q = QueryParams::from_serialize(&AssignmentsParams::default()).unwrap();
        assert!(q.is_empty());
    }

    #[test]
    fn test_pagination_is_flattened() {
        let params = ReviewsParams {
            subject_ids: Some(vec![8, 9]),
            page: PaginationParams {
                page_after_id: Some(100),
                per_page: Some(50),
                ..Default::default()
            },
            ..Default::default()
        };
        let q = QueryParams::from_serialize(&params).unwrap();
        let mut pairs: Vec<_> = q.iter().collect();
        pairs.sort();

        assert_eq!(
            pairs,
            vec![("page_after_id", "100"), ("per_page", "50"), ("subject_ids", "8,9")]
        );
    }

    #[test]
    fn test_subject_types_and_timestamps() {
        let params = SubjectsParams {
            types: Some(vec![SubjectType::Kanji, SubjectType::KanaVocabulary]),
            updated_after: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        let q = QueryParams::from_serialize(&params).unwrap();
        let pairs: Vec<_> = q.iter().collect();

        assert!(pairs.contains(&("types", "kanji,kana_vocabulary")));
        assert!(pairs.contains(&("updated_after", "2024-01-01T00:00:00Z")));
    }
}
