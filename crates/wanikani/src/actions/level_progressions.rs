//! Level progression actions.

use crate::client::WaniKaniClient;
use crate::error::Result;
use crate::query::QueryParams;
use crate::types::{Collection, LevelProgression, LevelProgressionsParams, Resource};

const ENDPOINT: &str = "level_progressions";

/// Provides access to level progression operations.
///
/// Obtained via [`WaniKaniClient::level_progressions()`].
#[derive(Debug)]
pub struct LevelProgressionActions<'a> {
    pub(crate) client: &'a WaniKaniClient,
}

impl<'a> LevelProgressionActions<'a> {
    /// List level progressions matching the filters.
    pub async fn list(
        &self,
        params: &LevelProgressionsParams,
    ) -> Result<Collection<LevelProgression>> {
        let query = QueryParams::from_serialize(params)?;
        self.client.fetch(ENDPOINT, &query).await
    }

    /// List level progressions with arbitrary query parameters.
    pub async fn list_with(&self, query: &QueryParams) -> Result<Collection<LevelProgression>> {
        self.client.fetch(ENDPOINT, query).await
    }

    /// Get a single level progression.
    pub async fn get(&self, id: u64) -> Result<Resource<LevelProgression>> {
        self.client
            .fetch(&format!("{}/{}", ENDPOINT, id), &QueryParams::new())
            .await
    }
}
