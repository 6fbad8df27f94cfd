use std::str::FromStr;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{info, warn};

use stockwise_protocol::gemini::generate_content::GenerateContentRequestBody;
use stockwise_provider_core::{ApiKey, CallContext, Provider, ProxyResponse, UpstreamFailure};

use crate::client::build_client;
use crate::upstream::{handle_response, network_failure};

pub const PROVIDER_NAME: &str = "gemini";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-pro";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeminiApiVersion {
    V1,
    #[default]
    V1Beta,
}

impl FromStr for GeminiApiVersion {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "v1" => Ok(Self::V1),
            "v1beta" => Ok(Self::V1Beta),
            other => Err(format!("unknown Gemini API version `{other}` (expected v1 or v1beta)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub version: GeminiApiVersion,
    /// Outbound proxy for the upstream client.
    pub proxy: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            version: GeminiApiVersion::default(),
            proxy: None,
        }
    }
}

pub struct GeminiProvider {
    config: GeminiConfig,
    client: wreq::Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, wreq::Error> {
        let client = build_client(config.proxy.as_deref())?;
        Ok(Self { config, client })
    }

    fn generate_path(&self) -> String {
        format!(
            "/{}/models/{}:generateContent",
            version_prefix(self.config.version),
            self.config.model
        )
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn generate(
        &self,
        credential: &ApiKey,
        body: GenerateContentRequestBody,
        ctx: CallContext,
    ) -> Result<ProxyResponse, UpstreamFailure> {
        let path = self.generate_path();
        let url = build_url(&self.config.base_url, &path);
        let started_at = Instant::now();
        info!(
            event = "upstream_request",
            trace_id = %ctx.trace_id,
            provider = %PROVIDER_NAME,
            op = "gemini.generate",
            method = "POST",
            path = %path,
            model = %self.config.model
        );
        let response = self
            .client
            .post(url)
            .query(&[("key", credential.expose())])
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                warn!(
                    event = "upstream_response",
                    trace_id = %ctx.trace_id,
                    provider = %PROVIDER_NAME,
                    op = "gemini.generate",
                    status = "error",
                    elapsed_ms = started_at.elapsed().as_millis(),
                    error = %err
                );
                network_failure(err)
            })?;
        info!(
            event = "upstream_response",
            trace_id = %ctx.trace_id,
            provider = %PROVIDER_NAME,
            op = "gemini.generate",
            status = %response.status().as_u16(),
            elapsed_ms = started_at.elapsed().as_millis()
        );
        handle_response(response).await
    }
}

fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mut path = path.trim_start_matches('/');
    if base.ends_with("/v1") && (path == "v1" || path.starts_with("v1/")) {
        path = path.trim_start_matches("v1/").trim_start_matches("v1");
    }
    if base.ends_with("/v1beta") && (path == "v1beta" || path.starts_with("v1beta/")) {
        path = path.trim_start_matches("v1beta/").trim_start_matches("v1beta");
    }
    format!("{base}/{path}")
}

fn version_prefix(version: GeminiApiVersion) -> &'static str {
    match version {
        GeminiApiVersion::V1 => "v1",
        GeminiApiVersion::V1Beta => "v1beta",
    }
}
