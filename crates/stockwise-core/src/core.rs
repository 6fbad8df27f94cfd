use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use stockwise_provider_core::Provider;

use crate::config::ProxyConfig;
use crate::handler::{generate_handler, health_handler};

pub struct CoreState {
    pub config: Arc<ProxyConfig>,
    pub provider: Arc<dyn Provider>,
}

pub struct Core {
    state: Arc<CoreState>,
}

impl Core {
    pub fn new(config: ProxyConfig, provider: Arc<dyn Provider>) -> Self {
        Self {
            state: Arc::new(CoreState {
                config: Arc::new(config),
                provider,
            }),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/gemini", post(generate_handler))
            .route("/health", get(health_handler))
            .with_state(self.state.clone())
    }
}
