use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use tower_http::cors::CorsLayer;

use portfolio_chat_relay::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().context("reading configuration")?;
    tracing::info!(?config, "configuration loaded");
    if config.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; /api/chat will answer 401");
    }

    let bind_addr = config.bind_addr;
    let state = Arc::new(AppState::new(config));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router()
        .route("/", get(|| async { "YOU ARE CONNECTED " }))
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;

    tracing::info!("chat relay running at http://{bind_addr}");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
