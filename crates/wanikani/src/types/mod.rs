//! Domain types for the WaniKani API.
//!
//! This module contains the response envelopes, the entity payloads they
//! wrap, request bodies and collection filters.

mod assignment;
mod envelope;
mod level_progression;
mod params;
mod review;
mod subject;

pub use assignment::{Assignment, AssignmentUpdate};
pub use envelope::{Collection, Pages, Resource};
pub use level_progression::LevelProgression;
pub use params::{
    AssignmentsParams, LevelProgressionsParams, PaginationParams, ReviewsParams, SubjectsParams,
};
pub use review::{CreateReview, Review};
pub use subject::{AuxiliaryMeaning, Meaning, Reading, Subject, SubjectType};
