//! Ecoplay API server entry point.

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use ecoplay_api::config::AppConfig;
use ecoplay_api::routes;
use ecoplay_api::state::{AppState, ContentSources};
use ecoplay_content::catalog::ContentCatalog;
use ecoplay_content::http::HttpContentSource;
use ecoplay_core::clock::{Clock, SystemClock};
use ecoplay_core::rng::{SystemRng, shared};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Ecoplay API server");

    // Read configuration from environment.
    let config = AppConfig::from_env()?;

    let rng = shared(SystemRng::from_os());
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);

    // Load the content catalog.
    let catalog = Arc::new(match &config.content_dir {
        Some(dir) => ContentCatalog::load_dir(dir, Arc::clone(&rng))?,
        None => ContentCatalog::built_in(Arc::clone(&rng)),
    });
    tracing::info!(version = catalog.version(), "content catalog ready");

    let sources = match &config.upstream_url {
        Some(url) => {
            tracing::info!(upstream = %url, "fetching session content from upstream provider");
            ContentSources::upstream(Arc::new(HttpContentSource::new(url, config.content_timeout)?))
        }
        None => ContentSources::local(&catalog),
    };

    // Build application state.
    let app_state = AppState::new(catalog, sources, clock, rng, config.word_time_limit_secs);
    app_state.spawn_session_sweepers(config.session_sweep_interval, config.session_idle_ttl);

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::content::router())
        .nest("/api/v1/adventure", routes::adventure::router())
        .nest("/api/v1/quiz", routes::quiz::router())
        .nest("/api/v1/words", routes::words::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr = config.addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
