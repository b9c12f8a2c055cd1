pub mod api;
pub mod completions;
pub mod config;

use axum::Router;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::completions::CompletionsClient;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub completions: CompletionsClient,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            completions: CompletionsClient::new(
                config.completions_url.clone(),
                config.api_key.clone(),
                config.model.clone(),
            ),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await.map_err(|e| {
        tracing::error!("Failed to bind port {}: {}", port, e);
        e
    })?;

    tracing::info!("Server is running on port {}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
