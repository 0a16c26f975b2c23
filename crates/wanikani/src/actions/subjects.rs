//! Subject actions.
//!
//! # Example
//!
//! ```no_run
//! use wanikani::{SubjectType, SubjectsParams, WaniKaniClient};
//!
//! # async fn example() -> wanikani::Result<()> {
//! let client = WaniKaniClient::new("my-api-token");
//!
//! let kanji = client
//!     .subjects()
//!     .list(&SubjectsParams {
//!         levels: Some(vec![1, 2]),
//!         types: Some(vec![SubjectType::Kanji]),
//!         ..Default::default()
//!     })
//!     .await?;
//! for subject in kanji.items() {
//!     println!("{:?} {:?}", subject.characters, subject.primary_meaning());
//! }
//! # Ok(())
//! # }
//! ```

use crate::client::WaniKaniClient;
use crate::error::Result;
use crate::query::QueryParams;
use crate::types::{Collection, Resource, Subject, SubjectsParams};

const ENDPOINT: &str = "subjects";

/// Provides access to subject operations.
///
/// Obtained via [`WaniKaniClient::subjects()`].
#[derive(Debug)]
pub struct SubjectActions<'a> {
    pub(crate) client: &'a WaniKaniClient,
}

impl<'a> SubjectActions<'a> {
    /// List subjects matching the filters.
    pub async fn list(&self, params: &SubjectsParams) -> Result<Collection<Subject>> {
        let query = QueryParams::from_serialize(params)?;
        self.client.fetch(ENDPOINT, &query).await
    }

    /// List subjects with arbitrary query parameters.
    pub async fn list_with(&self, query: &QueryParams) -> Result<Collection<Subject>> {
        self.client.fetch(ENDPOINT, query).await
    }

    /// Get a single subject.
    pub async fn get(&self, id: u64) -> Result<Resource<Subject>> {
        self.client
            .fetch(&format!("{}/{}", ENDPOINT, id), &QueryParams::new())
            .await
    }
}
