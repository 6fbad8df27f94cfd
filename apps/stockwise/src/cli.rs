use std::path::PathBuf;

use clap::Parser;
use stockwise_core::ProxyConfig;
use stockwise_provider_impl::{GeminiApiVersion, GeminiConfig};
use stockwise_provider_impl::provider::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "stockwise",
    about = "Stock prediction UI server with a Gemini proxy",
    version
)]
pub(crate) struct Cli {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub gemini_model: String,

    /// Upstream API version segment: v1 or v1beta
    #[arg(long, env = "GEMINI_API_VERSION", default_value = "v1beta")]
    pub gemini_api_version: GeminiApiVersion,

    /// Outbound proxy used for upstream calls
    #[arg(long, env = "STOCKWISE_PROXY")]
    pub proxy: Option<String>,

    /// Directory served for the browser client
    #[arg(long, env = "STOCKWISE_STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    #[arg(long, env = "STOCKWISE_INDEX_FILE", default_value = "stocks.html")]
    pub index_file: String,
}

impl Cli {
    pub fn proxy_config(&self) -> ProxyConfig {
        ProxyConfig::new(self.gemini_api_key.clone())
    }

    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            base_url: self.gemini_base_url.clone(),
            model: self.gemini_model.clone(),
            version: self.gemini_api_version,
            proxy: self.proxy.clone().filter(|value| !value.trim().is_empty()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn explicit_arguments_build_configs() {
        let cli = parse(&[
            "stockwise",
            "--host",
            "127.0.0.1",
            "--port",
            "5000",
            "--gemini-api-key",
            "abc123",
            "--gemini-base-url",
            "http://localhost:9999",
            "--gemini-model",
            "gemini-1.5-flash",
            "--gemini-api-version",
            "v1",
            "--proxy",
            "socks5://127.0.0.1:1080",
        ]);

        assert_eq!(cli.bind_addr(), "127.0.0.1:5000");
        assert!(cli.proxy_config().credential_configured());

        let gemini = cli.gemini_config();
        assert_eq!(gemini.base_url, "http://localhost:9999");
        assert_eq!(gemini.model, "gemini-1.5-flash");
        assert_eq!(gemini.version, GeminiApiVersion::V1);
        assert_eq!(gemini.proxy.as_deref(), Some("socks5://127.0.0.1:1080"));
    }

    #[test]
    fn empty_api_key_is_not_configured() {
        let cli = parse(&["stockwise", "--gemini-api-key", ""]);
        assert!(!cli.proxy_config().credential_configured());
    }

    #[test]
    fn blank_proxy_is_ignored() {
        let cli = parse(&["stockwise", "--proxy", " "]);
        assert_eq!(cli.gemini_config().proxy, None);
    }

    #[test]
    fn rejects_unknown_api_version() {
        assert!(Cli::try_parse_from(["stockwise", "--gemini-api-version", "v2"]).is_err());
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Cli::try_parse_from(["stockwise", "--port", "not-a-port"]).is_err());
    }
}
