//! Review actions.
//!
//! # Example
//!
//! ```no_run
//! use wanikani::{CreateReview, WaniKaniClient};
//!
//! # async fn example() -> wanikani::Result<()> {
//! let client = WaniKaniClient::new("my-api-token");
//!
//! // Meaning right on the first try, reading wrong once
//! let review = client.reviews().create(&CreateReview::new(1422, 0, 1)).await?;
//! println!("now at stage {}", review.data.ending_srs_stage);
//! # Ok(())
//! # }
//! ```

use crate::client::WaniKaniClient;
use crate::error::Result;
use crate::query::QueryParams;
use crate::types::{Collection, CreateReview, Resource, Review, ReviewsParams};

const ENDPOINT: &str = "reviews";

/// Provides access to review operations.
///
/// Obtained via [`WaniKaniClient::reviews()`].
#[derive(Debug)]
pub struct ReviewActions<'a> {
    pub(crate) client: &'a WaniKaniClient,
}

impl<'a> ReviewActions<'a> {
    /// List reviews matching the filters.
    pub async fn list(&self, params: &ReviewsParams) -> Result<Collection<Review>> {
        let query = QueryParams::from_serialize(params)?;
        self.client.fetch(ENDPOINT, &query).await
    }

    /// List reviews with arbitrary query parameters.
    pub async fn list_with(&self, query: &QueryParams) -> Result<Collection<Review>> {
        self.client.fetch(ENDPOINT, query).await
    }

    /// Get a single review.
    pub async fn get(&self, id: u64) -> Result<Resource<Review>> {
        self.client
            .fetch(&format!("{}/{}", ENDPOINT, id), &QueryParams::new())
            .await
    }

    /// Record a review.
    ///
    /// Returns the created review.
    pub async fn create(&self, review: &CreateReview) -> Result<Resource<Review>> {
        self.client.create(ENDPOINT, review).await
    }
}
