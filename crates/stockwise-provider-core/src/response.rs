use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct ProxyResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Debug, Clone, Error)]
pub enum UpstreamFailure {
    #[error("upstream request failed: {message}")]
    Network { message: String },
    #[error("upstream returned {status}")]
    Status { status: StatusCode, body: Bytes },
    #[error("upstream returned a malformed body: {message}")]
    Malformed { message: String },
}

impl UpstreamFailure {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }
}
