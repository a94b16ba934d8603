mod catalog;
mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::loader::{load_course_catalog, load_job_catalog};
use crate::config::Config;
use crate::matching::search::KeywordJobSearch;
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

    info!("Starting Pathfinder API v{}", env!("CARGO_PKG_VERSION"));

    // Load catalog snapshots once; they are never mutated after this point.
    let jobs = Arc::new(load_job_catalog(&config.jobs_file, config.catalog_strict)?);
    let courses = Arc::new(load_course_catalog(config.courses_file.as_deref())?);

    // Keyword search is the only backend for now; the Arc<dyn JobSearch>
    // seam exists so a semantic index can slot in without handler changes.
    let search = Arc::new(KeywordJobSearch);

    let state = AppState {
        jobs,
        courses,
        search,
        config: config.clone(),
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
