use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use clap::Parser;
use stockwise_core::Core;
use stockwise_provider_impl::GeminiProvider;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    init_tracing();
    if let Ok(path) = dotenv {
        info!(path = %path.display(), "loaded .env");
    }
    if let Err(err) = run().await {
        eprintln!("stockwise failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    let proxy_config = cli.proxy_config();
    let gemini_config = cli.gemini_config();
    info!(
        base_url = %gemini_config.base_url,
        model = %gemini_config.model,
        api_version = ?gemini_config.version,
        proxy = %gemini_config.proxy.as_deref().unwrap_or(""),
        credential_configured = proxy_config.credential_configured(),
        "config loaded"
    );
    if !proxy_config.credential_configured() {
        warn!("GEMINI_API_KEY is not set; /api/gemini will answer 500");
    }

    let provider = Arc::new(GeminiProvider::new(gemini_config)?);
    let core = Core::new(proxy_config, provider);
    let app = build_app(&core, &cli.static_dir, &cli.index_file);

    let bind = cli.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!(addr = %bind, "listening");
    info!(url = %format!("http://localhost:{}/health", cli.port), "health check");
    info!(url = %format!("http://localhost:{}", cli.port), "main app");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_app(core: &Core, static_dir: &Path, index_file: &str) -> Router {
    core.router()
        .route_service("/", ServeFile::new(static_dir.join(index_file)))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "stockwise=info,stockwise_core=info,stockwise_provider_impl=info,tower_http=info",
        )
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("received SIGTERM, shutting down");
        },
    }
}
