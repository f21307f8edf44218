// ABOUTME: Transport error types with SNAFU pattern.
// ABOUTME: Separates network failures from structured server responses.

use snafu::Snafu;

/// Error from a remote API call.
///
/// `Response` carries the structured server reply (status code + body) so
/// callers can distinguish client errors (4xx, configuration problems) from
/// server errors (5xx, transient).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ApiError {
    #[snafu(display("request failed: {source}"))]
    Transport { source: reqwest::Error },

    #[snafu(display("server responded {status}: {body}"))]
    Response { status: u16, body: String },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Connection, TLS, or protocol failure before a response arrived.
    Network,
    /// Server rejected the request (4xx).
    ClientError,
    /// Server failed to process the request (5xx).
    ServerError,
}

impl ApiError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Transport { .. } => ApiErrorKind::Network,
            ApiError::Response { status, .. } if (400..500).contains(status) => {
                ApiErrorKind::ClientError
            }
            ApiError::Response { .. } => ApiErrorKind::ServerError,
        }
    }

    /// Returns the HTTP status of a structured server response, if any.
    pub fn response_status(&self) -> Option<u16> {
        match self {
            ApiError::Response { status, .. } => Some(*status),
            ApiError::Transport { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(source: reqwest::Error) -> Self {
        ApiError::Transport { source }
    }
}
