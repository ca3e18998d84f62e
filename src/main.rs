use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::WhiskyStore;

/// Shared application state — cheap to clone (the store lives behind an Arc).
///
/// There is exactly one store per process; it is built in `main` and handed
/// to the router here rather than living in a global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<WhiskyStore>>,
}

impl AppState {
    pub fn new(store: WhiskyStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,whisky_service=debug"))
                .context("invalid log filter")?,
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Whisky Service  — Rust + Axum       ║");
    info!("║  in-memory CRUD over /api/whiskies   ║");
    info!("╚══════════════════════════════════════╝");

    let store = WhiskyStore::seeded();
    if store.is_empty() {
        tracing::warn!("Store started without any whiskies");
    }
    info!(count = store.len(), "Store seeded");
    let state = AppState::new(store);
    let app = build_router(state, &config.assets_dir);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn build_router(state: AppState, assets_dir: &str) -> Router {
    Router::new()
        // ── Static ──────────────────────────────────────────────────────────
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .nest_service("/assets", ServeDir::new(assets_dir))

        // ── Whiskies CRUD ───────────────────────────────────────────────────
        .route(
            "/api/whiskies",
            get(handlers::whiskies::list_whiskies).post(handlers::whiskies::create_whisky),
        )
        .route(
            "/api/whiskies/:id",
            get(handlers::whiskies::get_whisky)
                .put(handlers::whiskies::update_whisky)
                .delete(handlers::whiskies::delete_whisky),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
