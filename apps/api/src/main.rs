mod config;
mod errors;
mod layout;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod textsource;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::textsource::LlmTextSource;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("docgen_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Docgen API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the LLM-backed text source
    let llm = LlmClient::new(&config);
    let text_source = Arc::new(LlmTextSource::new(llm));
    info!("Text source initialized (model: {})", config.openai_model);

    if !render::fonts::fonts_available(&config.font_dir) {
        info!(
            "fonts not found in {}; rendering will fail until FONT_DIR points at the Roboto family",
            config.font_dir.display()
        );
    }

    // Build app state
    let state = AppState {
        text_source,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
