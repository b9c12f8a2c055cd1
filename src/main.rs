use anyhow::Context;
use listing_service::{build_app, config::AppConfig, init_tracing, run_server, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("info");

    let config = AppConfig::from_env().context("Configuration error")?;
    tracing::info!(
        port = config.port,
        upstream = %config.completions_url,
        model = ?config.model,
        "Starting listing service"
    );

    let app = build_app(AppState::from_config(&config));
    run_server(app, config.port).await.context("Server error")?;

    Ok(())
}
