mod config;
mod errors;
mod lexicon;
mod matching;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::lexicon::Lexicon;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("jobfit_api={}", config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobFit API v{}", env!("CARGO_PKG_VERSION"));

    // Load reference data: JSON snapshot if configured, compiled-in tables otherwise
    let lexicon = match &config.lexicon_path {
        Some(path) => {
            let lexicon = Lexicon::from_json_file(path)
                .with_context(|| format!("failed to load lexicon from {}", path.display()))?;
            info!("Lexicon loaded from {}", path.display());
            lexicon
        }
        None => {
            info!("Using built-in lexicon");
            Lexicon::builtin().clone()
        }
    };
    info!(
        stop_words = lexicon.stop_word_count(),
        synonyms = lexicon.synonyms().len(),
        skills = lexicon.skills().len(),
        roles = lexicon.roles().len(),
        "Lexicon ready"
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        lexicon: Arc::new(lexicon),
    };

    // Build router
    let app = build_router(state)
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
