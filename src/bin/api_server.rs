// src/bin/api_server.rs

use odetofood::infra::config::{AppConfig, StoreBackend};
use odetofood::infra::logging;
use odetofood::transport;
use odetofood::{DatabaseService, InMemoryStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = AppConfig::from_env()?;
    info!(backend = ?config.backend, bind_addr = %config.bind_addr, "Configuration loaded");

    // --- Store Initialization ---
    let app_state = match (config.backend, config.database.as_ref()) {
        (StoreBackend::Postgres, Some(db_config)) => {
            info!("Connecting to PostgreSQL and applying migrations...");
            let db_service = DatabaseService::connect(db_config).await?;
            transport::http::AppState::with_database(db_service)
        }
        (StoreBackend::Postgres, None) => {
            anyhow::bail!("postgres backend selected but no database configuration was loaded")
        }
        (StoreBackend::Memory, _) => {
            warn!("Using the in-memory store: data is lost on shutdown");
            let store = InMemoryStore::seeded();
            transport::http::AppState::new(Arc::new(store.restaurants()), Arc::new(store.reviews()))
        }
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);
    info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
