//! Internal request and response helpers for the WaniKani REST protocol.

use serde::Deserialize;

use crate::client::ApiVersion;
use crate::query::QueryParams;

/// The body returned with every non-success status.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub code: u16,
    pub error: String,
}

/// Compose the full request URL.
///
/// Produces `<base>/<version>/<endpoint>[?<query>]` regardless of stray
/// slashes at the joins. An empty version segment is left out.
pub(crate) fn endpoint_url(
    base_url: &str,
    version: &ApiVersion,
    endpoint: &str,
    query: &QueryParams,
) -> String {
    let base = base_url.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    let query = query.to_query_string();

    match version.path_segment() {
        "" => format!("{}/{}{}", base, endpoint, query),
        segment => format!("{}/{}/{}{}", base, segment, endpoint, query),
    }
}
