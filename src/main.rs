//! bloom-points server binary.
//!
//! Loads configuration from the environment, wires the user store, catalog
//! and air-quality provider into the HTTP router, and serves the API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bloom_points::adapters::http::{app_router, AppState};
use bloom_points::adapters::{
    catalog, InMemoryUserStore, JsonFileUserStore, StaticAirQualityProvider,
};
use bloom_points::config::{AppConfig, LogFormat, ServerConfig, StorageBackend};
use bloom_points::ports::UserStore;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server)?;

    info!(
        environment = ?config.server.environment,
        "Starting bloom-points"
    );

    let catalog = Arc::new(catalog::load(config.catalog.path.as_deref()).await?);

    let store: Arc<dyn UserStore> = match config.storage.backend {
        StorageBackend::File => {
            info!(path = %config.storage.data_path.display(), "Using JSON file user store");
            Arc::new(JsonFileUserStore::new(&config.storage.data_path))
        }
        StorageBackend::Memory => {
            info!("Using in-memory user store");
            Arc::new(InMemoryUserStore::new())
        }
    };

    let state = AppState::new(store, catalog, Arc::new(StaticAirQualityProvider::new()));

    let app = app_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server)?)
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match server.log_format {
        LogFormat::Json => builder.json().try_init()?,
        LogFormat::Pretty => builder.try_init()?,
    }
    Ok(())
}

fn cors_layer(server: &ServerConfig) -> Result<CorsLayer, BoxError> {
    let origins = server.cors_origins_list();
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(layer.allow_origin(origins))
}
