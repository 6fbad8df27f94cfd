use async_trait::async_trait;
use stockwise_protocol::gemini::generate_content::GenerateContentRequestBody;

use crate::credential::ApiKey;
use crate::response::{ProxyResponse, UpstreamFailure};

#[derive(Debug, Clone, Default)]
pub struct CallContext {
    pub trace_id: String,
}

#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;

    /// Issues exactly one outbound `generateContent` call.
    async fn generate(
        &self,
        credential: &ApiKey,
        body: GenerateContentRequestBody,
        ctx: CallContext,
    ) -> Result<ProxyResponse, UpstreamFailure>;
}
