//! Response envelopes shared by every endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entity wrapped with its server-assigned metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<T> {
    /// Server-assigned identifier.
    pub id: u64,
    /// Type tag, e.g. `"assignment"`.
    pub object: String,
    /// Canonical URL of the resource.
    pub url: String,
    /// When the resource's data last changed.
    #[serde(default)]
    pub data_updated_at: Option<DateTime<Utc>>,
    /// The entity itself.
    pub data: T,
    /// Top-level fields not modelled above, kept so re-serialization is lossless.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Pagination cursors for a collection page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    /// Maximum number of items per page.
    pub per_page: u32,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next_url: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous_url: Option<String>,
}

/// A page of entities returned by a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    /// Identifier, when the server assigns one to the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Always `"collection"`.
    pub object: String,
    /// URL of this page.
    pub url: String,
    /// Pagination cursors.
    pub pages: Pages,
    /// Total number of matching entities across all pages.
    pub total_count: u64,
    /// Most recent update time across the matching entities.
    #[serde(default)]
    pub data_updated_at: Option<DateTime<Utc>>,
    /// The entities on this page.
    pub data: Vec<Resource<T>>,
    /// Top-level fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> Collection<T> {
    /// Iterate over the entity payloads, dropping envelope metadata.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.data.iter().map(|resource| &resource.data)
    }

    /// Number of entities on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the server reports another page after this one.
    pub fn has_next_page(&self) -> bool {
        self.pages.next_url.is_some()
    }
}
