//! Geocoding client error types.

/// Errors from the upstream locations API client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The request did not complete within the configured timeout.
    #[error("geocoding request timed out")]
    Timeout,

    /// HTTP request failed (connection refused, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Failed to parse the response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid maps API key)")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by the maps API")]
    RateLimited,

    /// No candidate locations matched the query
    #[error("no locations match {query:?}")]
    NoMatches { query: String },

    /// Response was well-formed JSON but not in the expected shape
    #[error("unexpected response shape: {0}")]
    BadShape(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest reports a client-side deadline as a request error
        if err.is_timeout() {
            GeocodeError::Timeout
        } else {
            GeocodeError::Http(err)
        }
    }
}

impl GeocodeError {
    /// True if the query simply had no matching locations, as opposed to a
    /// transport or service failure.
    pub fn is_no_matches(&self) -> bool {
        matches!(self, GeocodeError::NoMatches { .. })
    }
}
