use std::sync::Arc;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use tracing::{info, warn};
use uuid::Uuid;

use stockwise_protocol::api::{HealthResponse, PromptRequest};
use stockwise_provider_core::{CallContext, ProxyResponse};

use crate::core::CoreState;
use crate::envelope::build_envelope;
use crate::error::{ProxyError, map_upstream_failure};

pub async fn generate_handler(
    State(state): State<Arc<CoreState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let trace_id = trace_id(&headers);
    match generate(&state, &trace_id, body).await {
        Ok(response) => proxy_response(response),
        Err(err) => {
            warn!(
                event = "proxy_error",
                trace_id = %trace_id,
                kind = err.kind(),
                status = err.status().as_u16(),
                error = %err,
                details = ?err.payload().details
            );
            err.into_response()
        }
    }
}

pub async fn health_handler(State(state): State<Arc<CoreState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.config.credential_configured()))
}

async fn generate(
    state: &CoreState,
    trace_id: &str,
    body: Bytes,
) -> Result<ProxyResponse, ProxyError> {
    let request = PromptRequest::from_slice(&body)?;
    let credential = state
        .config
        .api_key
        .as_ref()
        .ok_or(ProxyError::Configuration)?;

    info!(
        event = "downstream_request",
        trace_id = %trace_id,
        provider = %state.provider.name(),
        prompt_chars = request.prompt.chars().count()
    );
    let ctx = CallContext {
        trace_id: trace_id.to_string(),
    };
    state
        .provider
        .generate(credential, build_envelope(request.prompt), ctx)
        .await
        .map_err(map_upstream_failure)
}

fn proxy_response(response: ProxyResponse) -> Response {
    let content_type = response
        .headers
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let mut resp = Response::new(Body::from(response.body));
    *resp.status_mut() = response.status;
    resp.headers_mut().insert(CONTENT_TYPE, content_type);
    resp
}

fn trace_id(headers: &HeaderMap) -> String {
    headers
        .get("x-request-id")
        .or_else(|| headers.get("request-id"))
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
