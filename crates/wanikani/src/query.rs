//! Query-string construction for collection endpoints.
//!
//! Collection endpoints accept filter and pagination parameters. The typed
//! filter structs ([`AssignmentsParams`](crate::AssignmentsParams) and friends)
//! are converted with [`QueryParams::from_serialize`], and arbitrary keys can be
//! added with the fluent methods.
//!
//! # Example
//!
//! ```
//! use wanikani::QueryParams;
//!
//! let query = QueryParams::new()
//!     .param("levels", "1,2")
//!     .flag("hidden", false);
//!
//! assert_eq!(query.to_query_string(), "?levels=1%2C2&hidden=false");
//! assert_eq!(QueryParams::new().to_query_string(), "");
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::Result;

/// An ordered set of query parameters.
///
/// Parameter order carries no meaning for the API; pairs are emitted in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use = "QueryParams does nothing until it is passed to a request"]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Convert a serializable filter struct into query parameters.
    ///
    /// Strings pass through unchanged, booleans render as `true`/`false`,
    /// numbers in decimal and arrays as comma-joined lists. `None` fields
    /// are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use wanikani::{QueryParams, SubjectsParams};
    ///
    /// let params = SubjectsParams {
    ///     levels: Some(vec![1, 2]),
    ///     ..Default::default()
    /// };
    /// let query = QueryParams::from_serialize(&params)?;
    /// assert_eq!(query.to_query_string(), "?levels=1%2C2");
    /// # Ok::<(), wanikani::Error>(())
    /// ```
    pub fn from_serialize<T>(params: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let mut query = Self::new();
        match serde_json::to_value(params)? {
            Value::Object(map) => {
                for (key, value) in map {
                    if let Some(rendered) = render_value(&value) {
                        query.pairs.push((key, rendered));
                    }
                }
            }
            Value::Null => {}
            _ => {
                return Err(<serde_json::Error as serde::ser::Error>::custom(
                    "query parameters must serialize to a map",
                )
                .into());
            }
        }
        Ok(query)
    }

    /// Add a key/value pair.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Add a boolean filter.
    pub fn flag(self, key: impl Into<String>, value: bool) -> Self {
        self.param(key, value)
    }

    /// Append every pair from `other`.
    pub fn merge(mut self, other: QueryParams) -> Self {
        self.pairs.extend(other.pairs);
        self
    }

    /// Whether no parameters have been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterate over the raw (unencoded) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as a URL query string.
    ///
    /// Returns an empty string when there are no parameters, otherwise `?`
    /// followed by form-urlencoded pairs.
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        format!("?{}", encoded)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(render_value).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(","))
            }
        }
        Value::Object(_) => Some(value.to_string()),
    }
}
