use axum::{
    Router,
    routing::{get, post},
};
use anyhow::Context;
use configuration::{Config, load_universe};
use optimizer::PortfolioOptimizer;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use universe::InstrumentUniverse;

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Debug, Clone)]
pub struct AppState {
    pub optimizer: PortfolioOptimizer,
}

impl AppState {
    pub fn new(optimizer: PortfolioOptimizer) -> Self {
        Self { optimizer }
    }
}

/// The configured custom universe, or the built-in table when none is set.
pub fn universe_from_config(config: &Config) -> anyhow::Result<InstrumentUniverse> {
    match &config.universe_file {
        Some(path) => {
            let instruments = load_universe(path)
                .with_context(|| format!("failed to load universe file {}", path.display()))?;
            let universe = InstrumentUniverse::from_instruments(instruments)
                .with_context(|| format!("invalid universe file {}", path.display()))?;
            tracing::info!(path = %path.display(), instruments = universe.len(), "Loaded custom universe.");
            Ok(universe)
        }
        None => Ok(InstrumentUniverse::builtin()),
    }
}

/// Builds the router with every route and middleware attached.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/sectors", get(handlers::get_sectors))
        .route("/api/universe", get(handlers::get_universe))
        .route("/api/optimize", post(handlers::post_optimize))
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Serves the API until Ctrl-C. Tracing must already be initialized by the caller.
pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = build_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal.");
    }
}
