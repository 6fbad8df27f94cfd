use serde::de::IgnoredAny;

use stockwise_provider_core::{ProxyResponse, UpstreamFailure};

pub fn network_failure(err: wreq::Error) -> UpstreamFailure {
    UpstreamFailure::network(err.to_string())
}

/// Classifies a finished upstream exchange. Only a 2xx status with a JSON
/// body is a success; the body bytes are kept untouched.
pub async fn handle_response(response: wreq::Response) -> Result<ProxyResponse, UpstreamFailure> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(network_failure)?;

    if !status.is_success() {
        return Err(UpstreamFailure::Status { status, body });
    }

    if let Err(err) = serde_json::from_slice::<IgnoredAny>(&body) {
        return Err(UpstreamFailure::Malformed {
            message: err.to_string(),
        });
    }

    Ok(ProxyResponse {
        status,
        headers,
        body,
    })
}
