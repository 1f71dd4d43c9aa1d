use std::sync::Arc;

use anyhow::Context;
use apparel_caption_studio::{router, AppState, Config, OpenAiGateway};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    if config.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; generation requests will fail with 500");
    }

    let gateway = OpenAiGateway::new(&config).context("failed to build model client")?;
    let bind_addr = config.bind_addr;
    let state = AppState::new(config, Arc::new(gateway));

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
