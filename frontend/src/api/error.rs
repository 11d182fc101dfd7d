//! Error type for the REST client.
//!
//! Every client operation resolves to exactly one `Ok` or one `ApiError`.
//! The variants separate the three places a request can fail: assembling
//! the payload, the network round-trip, and interpreting the response.

use std::fmt;

/// Errors returned by `ApiClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be assembled (multipart payload, JSON body).
    Request(String),

    /// The request never produced a response (network failure, aborted).
    Network(String),

    /// The server answered with a non-2xx status. The raw body is kept for
    /// logging.
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(msg) => write!(f, "request could not be built: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Decode(msg) => write!(f, "response decoding failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_carry_code_and_body() {
        let err = ApiError::Status {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: internal error");
    }
}
