mod config;
mod db;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod parser;
mod routes;
mod skills;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::skills::oracle::LlmSkillOracle;
use crate::state::AppState;
use crate::store::attachments::file_server_client;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (aborts on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Parser API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize MySQL (candidate record store, read-only)
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client — shared by the structured extractor and the
    // skill oracle; stateless, so one handle serves every request
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize skill oracle (LLM-backed by default; tests inject stubs)
    let skill_oracle = Arc::new(LlmSkillOracle::new(llm.clone()));

    // Initialize file-server client for resume attachment downloads
    let file_server = file_server_client();
    info!("File server client initialized");

    // Build app state
    let state = AppState {
        db,
        llm,
        skill_oracle,
        file_server,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Fallback tracing directive when `RUST_LOG` is unset. Tracing targets use
/// the underscored crate name, not the hyphenated package name.
fn default_filter_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), level)
}
