mod config;
mod documents;
mod errors;
mod generation;
mod llm_client;
mod models;
mod preview;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::documents::DocumentStore;
use crate::generation::generator::{DocumentGenerator, LlmGenerator, TemplateGenerator};
use crate::llm_client::LlmClient;
use crate::preview::sessions::PreviewRegistry;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting docpreview v{}", env!("CARGO_PKG_VERSION"));

    // Pick the generation backend: LLM when a key is configured, templates otherwise
    let generator: Arc<dyn DocumentGenerator> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmGenerator(llm))
        }
        None => {
            info!("ANTHROPIC_API_KEY not set; using template generation");
            Arc::new(TemplateGenerator)
        }
    };

    let documents = DocumentStore::new();
    let state = AppState {
        config: config.clone(),
        previews: PreviewRegistry::new(documents.clone()),
        documents,
        generator,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
