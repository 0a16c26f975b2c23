//! A typed, async Rust client for the WaniKani API.
//!
//! This crate wraps the WaniKani REST API: it builds request URLs, sends the
//! API token as a bearer credential and (de)serializes the JSON envelopes the
//! API speaks.
//!
//! # Quick Start
//!
//! ```no_run
//! use wanikani::WaniKaniClient;
//!
//! # async fn example() -> wanikani::Result<()> {
//! // Bind the API token once
//! let client = WaniKaniClient::new("my-api-token");
//!
//! let subject = client.subjects().get(440).await?;
//! println!("{:?} means {:?}", subject.data.characters, subject.data.primary_meaning());
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! ```no_run
//! use std::time::Duration;
//! use wanikani::{ApiVersion, WaniKaniClient};
//!
//! let client = WaniKaniClient::builder()
//!     .api_key("my-api-token")
//!     .url("https://api.wanikani.com")
//!     .version(ApiVersion::V2)
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! ```
//!
//! # Action Groups
//!
//! - [`WaniKaniClient::assignments()`] - List, get and update assignments
//! - [`WaniKaniClient::level_progressions()`] - List and get level progressions
//! - [`WaniKaniClient::reviews()`] - List, get and create reviews
//! - [`WaniKaniClient::subjects()`] - List and get radicals, kanji and vocabulary
//!
//! Single items come back wrapped in a [`Resource`], list endpoints return a
//! [`Collection`] page. Pagination is driven by the caller through
//! [`PaginationParams`]; the client never follows `next_url` on its own.
//!
//! # Errors
//!
//! Any non-success response becomes [`Error::Api`] with the server's code
//! and message.

pub mod actions;
pub mod client;
pub mod error;
pub mod query;
mod request;
pub mod types;

pub use client::{ApiVersion, ClientBuilder, LEGACY_REVISION, WaniKaniClient};
pub use error::{Error, Result};
pub use query::QueryParams;
pub use types::{
    Assignment, AssignmentUpdate, AssignmentsParams, AuxiliaryMeaning, Collection, CreateReview,
    LevelProgression, LevelProgressionsParams, Meaning, Pages, PaginationParams, Reading, Resource,
    Review, ReviewsParams, Subject, SubjectType, SubjectsParams,
};

// Re-exported so callers can use `execute` without depending on reqwest.
pub use reqwest::Method;
