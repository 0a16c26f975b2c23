//! The WaniKani client and builder.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::actions::{AssignmentActions, LevelProgressionActions, ReviewActions, SubjectActions};
use crate::error::{Error, Result};
use crate::query::QueryParams;
use crate::request::{ErrorResponse, endpoint_url};

/// Default API host.
const DEFAULT_URL: &str = "https://api.wanikani.com";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Revision used by the legacy dated API.
pub const LEGACY_REVISION: &str = "20170710";

/// Which API generation to address.
///
/// The generations differ only in the first path segment of every URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ApiVersion {
    /// The current API under `v2/`.
    #[default]
    V2,
    /// A dated revision prefix such as `20170710/`.
    Revision(String),
}

impl ApiVersion {
    /// The legacy API at its default revision.
    pub fn legacy() -> Self {
        ApiVersion::Revision(LEGACY_REVISION.to_string())
    }

    /// The URL path segment for this version, without slashes.
    pub fn path_segment(&self) -> &str {
        match self {
            ApiVersion::V2 => "v2",
            ApiVersion::Revision(revision) => revision.trim_matches('/'),
        }
    }
}

/// The main client for interacting with the WaniKani API.
///
/// A client binds one API token; every operation it exposes sends that
/// token as a bearer credential. Cloning is cheap and clones share the
/// underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use wanikani::WaniKaniClient;
///
/// # async fn example() -> wanikani::Result<()> {
/// let client = WaniKaniClient::new("my-api-token");
///
/// let assignment = client.assignments().get(123).await?;
/// println!("Subject {} at stage {}", assignment.data.subject_id, assignment.data.srs_stage);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WaniKaniClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    version: ApiVersion,
}

impl WaniKaniClient {
    /// Create a client for `api_key` with default settings.
    ///
    /// Talks to `https://api.wanikani.com/v2/` with a 30 second timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The API version this client addresses.
    pub fn version(&self) -> &ApiVersion {
        &self.version
    }

    /// A client addressing a different API version with the same token
    /// and connection pool.
    pub fn with_version(&self, version: ApiVersion) -> Self {
        Self {
            version,
            ..self.clone()
        }
    }

    /// Access assignment operations.
    pub fn assignments(&self) -> AssignmentActions<'_> {
        AssignmentActions { client: self }
    }

    /// Access level progression operations.
    pub fn level_progressions(&self) -> LevelProgressionActions<'_> {
        LevelProgressionActions { client: self }
    }

    /// Access review operations.
    pub fn reviews(&self) -> ReviewActions<'_> {
        ReviewActions { client: self }
    }

    /// Access subject operations.
    pub fn subjects(&self) -> SubjectActions<'_> {
        SubjectActions { client: self }
    }

    /// The full URL a request for `endpoint` with `query` would use.
    pub fn url_for(&self, endpoint: &str, query: &QueryParams) -> String {
        endpoint_url(&self.base_url, &self.version, endpoint, query)
    }

    /// GET an endpoint with query parameters.
    pub async fn fetch<R>(&self, endpoint: &str, query: &QueryParams) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.execute::<(), R>(Method::GET, endpoint, query, None).await
    }

    /// PUT a JSON body to an endpoint.
    pub async fn update<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(Method::PUT, endpoint, &QueryParams::new(), Some(body))
            .await
    }

    /// POST a JSON body to an endpoint.
    pub async fn create<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(Method::POST, endpoint, &QueryParams::new(), Some(body))
            .await
    }

    /// Perform one round-trip against the API.
    ///
    /// A success status yields the body parsed as `R`. Any other status
    /// yields [`Error::Api`] built from the `{ code, error }` body.
    pub async fn execute<B, R>(
        &self,
        method: Method,
        endpoint: &str,
        query: &QueryParams,
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url_for(endpoint, query);
        debug!(method = %method, url = %url, "Sending request");

        let mut request = self
            .http_client
            .request(method, url.as_str())
            .bearer_auth(&self.api_key)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                Error::ConnectionRefused
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "Received response");

        if !status.is_success() {
            let error: ErrorResponse = serde_json::from_str(&text)?;
            warn!(code = error.code, url = %url, "API request failed");
            return Err(Error::Api {
                code: error.code,
                message: error.error,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

// The token is a credential; keep it out of debug output.
impl fmt::Debug for WaniKaniClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaniKaniClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("version", &self.version)
            .finish()
    }
}

/// Builder for creating a customized [`WaniKaniClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use wanikani::{ApiVersion, WaniKaniClient};
///
/// let client = WaniKaniClient::builder()
///     .api_key("my-api-token")
///     .version(ApiVersion::legacy())
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: String,
    version: ApiVersion,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: String::new(),
            version: ApiVersion::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API host.
    ///
    /// Defaults to `https://api.wanikani.com`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API token sent as the bearer credential.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Set the API version.
    ///
    /// Defaults to [`ApiVersion::V2`].
    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> WaniKaniClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");

        WaniKaniClient {
            http_client,
            base_url: self.base_url,
            api_key: self.api_key,
            version: self.version,
        }
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("version", &self.version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
