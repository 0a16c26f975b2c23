//! Action modules for WaniKani API resources.
//!
//! Each module provides the operations available on one resource.

mod assignments;
mod level_progressions;
mod reviews;
mod subjects;

pub use assignments::AssignmentActions;
pub use level_progressions::LevelProgressionActions;
pub use reviews::ReviewActions;
pub use subjects::SubjectActions;
