use stockwise_provider_core::ApiKey;

/// Settings the handlers need, resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    pub api_key: Option<ApiKey>,
}

impl ProxyConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: ApiKey::from_env_value(api_key),
        }
    }

    pub fn credential_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
