use axum::Json;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use http::StatusCode;
use serde_json::Value as JsonValue;
use thiserror::Error;

use stockwise_protocol::api::{ErrorPayload, PromptRejection};
use stockwise_provider_core::UpstreamFailure;

pub const MISSING_PROMPT: &str = "Prompt is required";
pub const MISSING_CREDENTIAL: &str = "Gemini API key not configured";
pub const UPSTREAM_FAILED: &str = "Failed to get response from Gemini API";

#[derive(Debug, Clone, Error)]
pub enum ProxyError {
    #[error("{message}")]
    Validation {
        message: String,
        details: Option<JsonValue>,
    },
    #[error("Gemini API key not configured")]
    Configuration,
    #[error("Failed to get response from Gemini API")]
    Upstream { details: Option<JsonValue> },
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Configuration | Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::Configuration => "configuration",
            Self::Upstream { .. } => "upstream",
        }
    }

    pub fn payload(&self) -> ErrorPayload {
        let details = match self {
            Self::Validation { details, .. } | Self::Upstream { details } => details.clone(),
            Self::Configuration => None,
        };
        ErrorPayload::new(self.to_string()).with_details(details)
    }
}

impl From<PromptRejection> for ProxyError {
    fn from(rejection: PromptRejection) -> Self {
        match rejection {
            PromptRejection::MissingPrompt => Self::Validation {
                message: MISSING_PROMPT.to_string(),
                details: None,
            },
            PromptRejection::InvalidBody(reason) => Self::Validation {
                message: MISSING_PROMPT.to_string(),
                details: Some(JsonValue::String(reason)),
            },
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.payload())).into_response()
    }
}

/// Maps an upstream failure onto the public error contract. The upstream
/// payload is only ever carried as opaque `details`.
pub fn map_upstream_failure(failure: UpstreamFailure) -> ProxyError {
    let details = match failure {
        UpstreamFailure::Network { message } => JsonValue::String(message),
        UpstreamFailure::Status { status, body } => body_details(&body)
            .unwrap_or_else(|| JsonValue::String(format!("upstream returned {status}"))),
        UpstreamFailure::Malformed { message } => JsonValue::String(message),
    };
    ProxyError::Upstream {
        details: Some(details),
    }
}

fn body_details(body: &Bytes) -> Option<JsonValue> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    Some(
        serde_json::from_slice(body)
            .unwrap_or_else(|_| JsonValue::String(String::from_utf8_lossy(body).into_owned())),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_status_body_becomes_details() {
        let failure = UpstreamFailure::Status {
            status: StatusCode::FORBIDDEN,
            body: Bytes::from_static(br#"{"error":{"code":403,"status":"PERMISSION_DENIED"}}"#),
        };

        let err = map_upstream_failure(failure);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.payload(),
            ErrorPayload {
                error: UPSTREAM_FAILED.to_string(),
                details: Some(json!({"error": {"code": 403, "status": "PERMISSION_DENIED"}})),
            }
        );
    }

    #[test]
    fn text_status_body_is_kept_as_string() {
        let failure = UpstreamFailure::Status {
            status: StatusCode::BAD_GATEWAY,
            body: Bytes::from_static(b"bad gateway"),
        };

        let payload = map_upstream_failure(failure).payload();
        assert_eq!(payload.details, Some(json!("bad gateway")));
    }

    #[test]
    fn empty_status_body_falls_back_to_status_message() {
        let failure = UpstreamFailure::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: Bytes::new(),
        };

        let payload = map_upstream_failure(failure).payload();
        assert_eq!(
            payload.details,
            Some(json!("upstream returned 503 Service Unavailable"))
        );
    }

    #[test]
    fn malformed_body_carries_parse_error() {
        let failure = UpstreamFailure::Malformed {
            message: "expected value at line 1 column 1".to_string(),
        };

        let err = map_upstream_failure(failure);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.payload(),
            ErrorPayload {
                error: UPSTREAM_FAILED.to_string(),
                details: Some(json!("expected value at line 1 column 1")),
            }
        );
    }

    #[test]
    fn network_failure_carries_message() {
        let payload = map_upstream_failure(UpstreamFailure::network("connection refused")).payload();
        assert_eq!(payload.error, UPSTREAM_FAILED);
        assert_eq!(payload.details, Some(json!("connection refused")));
    }

    #[test]
    fn configuration_error_has_no_details() {
        let err = ProxyError::Configuration;
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.payload(), ErrorPayload::new(MISSING_CREDENTIAL));
    }

    #[test]
    fn rejected_prompt_is_bad_request() {
        let err = ProxyError::from(PromptRejection::MissingPrompt);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.payload(), ErrorPayload::new(MISSING_PROMPT));
    }
}
