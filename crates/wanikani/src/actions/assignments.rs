//! Assignment actions.
//!
//! Assignments track the user's progress on each subject: whether it has been
//! unlocked, started, passed or burned and when the next review is due.
//!
//! # Example
//!
//! ```no_run
//! use wanikani::{AssignmentsParams, WaniKaniClient};
//!
//! # async fn example() -> wanikani::Result<()> {
//! let client = WaniKaniClient::new("my-api-token");
//!
//! // Everything that can be reviewed right now
//! let due = client
//!     .assignments()
//!     .list(&AssignmentsParams {
//!         immediately_available_for_review: Some(true),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} reviews waiting", due.total_count);
//! # Ok(())
//! # }
//! ```

use crate::client::WaniKaniClient;
use crate::error::Result;
use crate::query::QueryParams;
use crate::types::{Assignment, AssignmentUpdate, AssignmentsParams, Collection, Resource};

const ENDPOINT: &str = "assignments";

/// Provides access to assignment operations.
///
/// Obtained via [`WaniKaniClient::assignments()`].
#[derive(Debug)]
pub struct AssignmentActions<'a> {
    pub(crate) client: &'a WaniKaniClient,
}

impl<'a> AssignmentActions<'a> {
    /// List assignments matching the filters.
    pub async fn list(&self, params: &AssignmentsParams) -> Result<Collection<Assignment>> {
        let query = QueryParams::from_serialize(params)?;
        self.client.fetch(ENDPOINT, &query).await
    }

    /// List assignments with arbitrary query parameters.
    pub async fn list_with(&self, query: &QueryParams) -> Result<Collection<Assignment>> {
        self.client.fetch(ENDPOINT, query).await
    }

    /// Get a single assignment.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use wanikani::WaniKaniClient;
    /// # async fn example() -> wanikani::Result<()> {
    /// let client = WaniKaniClient::new("my-api-token");
    /// let assignment = client.assignments().get(80463006).await?;
    /// if assignment.data.burned_at.is_some() {
    ///     println!("burned");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, id: u64) -> Result<Resource<Assignment>> {
        self.client
            .fetch(&format!("{}/{}", ENDPOINT, id), &QueryParams::new())
            .await
    }

    /// Update an assignment.
    ///
    /// Returns the assignment as stored after the update.
    pub async fn update(&self, id: u64, update: &AssignmentUpdate) -> Result<Resource<Assignment>> {
        self.client
            .update(&format!("{}/{}", ENDPOINT, id), update)
            .await
    }
}
