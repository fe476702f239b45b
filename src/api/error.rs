//! Error taxonomy for requests against either data source
//!
//! Kept as a plain enum so callers can tell a missing record apart from a
//! transport failure before the error is flattened into `anyhow`.

use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    /// The server answered 404 for this URL
    NotFound { url: String },
    /// The server answered with any other non-success status
    Status { url: String, status: u16 },
    /// Connection, IO or body decoding failure
    Transport { url: String, source: reqwest::Error },
}

impl FetchError {
    /// True when the record is absent upstream
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }

    /// URL of the failed request
    pub fn url(&self) -> &str {
        match self {
            FetchError::NotFound { url }
            | FetchError::Status { url, .. }
            | FetchError::Transport { url, .. } => url,
        }
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::NotFound { .. } => Some(404),
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound { url } => write!(f, "not found: {}", url),
            FetchError::Status { url, status } => write!(f, "HTTP {} from {}", status, url),
            FetchError::Transport { url, source } => write!(f, "request to {} failed: {}", url, source),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport { source, .. } => Some(source),
            FetchError::NotFound { .. } | FetchError::Status { .. } => None,
        }
    }
}
