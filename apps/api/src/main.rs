use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pack_api::catalog::{CatalogService, JsonFileStore};
use pack_api::config::Config;
use pack_api::routes::build_router;
use pack_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("pack_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pack API v{}", env!("CARGO_PKG_VERSION"));

    // Load (or seed) the pack-size catalog
    let store = Arc::new(JsonFileStore::new(&config.pack_sizes_path));
    let catalog = CatalogService::open(store, config.default_pack_sizes.clone())
        .await
        .with_context(|| {
            format!(
                "Failed to load pack sizes from {}",
                config.pack_sizes_path.display()
            )
        })?;
    info!("Pack sizes: {:?}", catalog.snapshot().await);
    info!("Reoptimize mode: {}", config.reoptimize_mode);

    let state = AppState::new(config.clone(), catalog);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
