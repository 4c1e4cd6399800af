mod config;
mod errors;
mod extraction;
mod pipeline;
mod reports;
mod routes;
mod scoring;
mod state;
mod terms;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::pipeline::BatchPipeline;
use crate::routes::build_router;
use crate::scoring::build_scorer;
use crate::state::AppState;
use crate::terms::{LexiconTagger, Tagger};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Screener v{}", env!("CARGO_PKG_VERSION"));

    // Report root must exist before the first batch writes into it
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("Cannot create upload dir '{}'", config.upload_dir.display()))?;
    info!("Reports stored under {}", config.upload_dir.display());

    // Tagger is built once and shared by every request
    let tagger: Arc<dyn Tagger> = Arc::new(LexiconTagger::new());

    // Scorer selected by SCORING_STRATEGY (overlap by default)
    let scorer = build_scorer(config.scoring_strategy, tagger);
    info!("Scoring strategy: {}", scorer.name());

    let pipeline = BatchPipeline::new(scorer);
    let state = AppState::new(config.clone(), pipeline);

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
