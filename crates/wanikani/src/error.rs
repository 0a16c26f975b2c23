//! Error types for the wanikani crate.
//!
//! Every failure reported by the WaniKani API surfaces as [`Error::Api`],
//! carrying the numeric code and message from the response body. Inspect the
//! code (or use the helper predicates) to tell authentication failures,
//! missing resources and validation errors apart.
//!
//! # Example
//!
//! ```no_run
//! use wanikani::{Error, WaniKaniClient};
//!
//! # async fn example() {
//! let client = WaniKaniClient::new("my-api-token");
//!
//! match client.assignments().get(123).await {
//!     Ok(assignment) => println!("SRS stage {}", assignment.data.srs_stage),
//!     Err(e) if e.is_unauthorized() => eprintln!("Check your API token"),
//!     Err(Error::Api { code, message }) => eprintln!("API error {code}: {message}"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for WaniKani API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-success status.
    ///
    /// `code` and `message` are the `code` and `error` fields of the
    /// response body.
    #[error("WaniKani API error {code}: {message}")]
    Api {
        /// Numeric error code reported by the server.
        code: u16,
        /// Error message reported by the server.
        message: String,
    },

    /// HTTP/network error from reqwest.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API host could not be reached.
    #[error("Could not connect to the WaniKani API")]
    ConnectionRefused,

    /// A request or response body did not match the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The server-reported code, if this is an API error.
    pub fn code(&self) -> Option<u16> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the API token was missing or rejected (401).
    pub fn is_unauthorized(&self) -> bool {
        self.code() == Some(401)
    }

    /// Whether the requested resource does not exist (404).
    pub fn is_not_found(&self) -> bool {
        self.code() == Some(404)
    }

    /// Whether the request body failed server-side validation (422).
    pub fn is_unprocessable(&self) -> bool {
        self.code() == Some(422)
    }

    /// Whether the request was throttled (429).
    pub fn is_rate_limited(&self) -> bool {
        self.code() == Some(429)
    }
}

/// A specialized Result type for WaniKani API operations.
pub type Result<T> = std::result::Result<T, Error>;
