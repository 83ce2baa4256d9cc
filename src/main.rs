use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bank_portal_api::config::Config;
use bank_portal_api::handlers::{self, AppState};
use bank_portal_api::store::SubmissionStore;

/// Main entry point for the application.
///
/// Initializes tracing, loads configuration, opens the flat-file submission
/// store, and starts the Axum server with CORS, request-size-limit, and HTTP
/// trace middleware.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bank_portal_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Open the submission store (creates the data directory if missing)
    let store = SubmissionStore::open(&config.data_dir).await?;
    tracing::info!("Data directory ready: {}", config.data_dir.display());

    let app_state = Arc::new(AppState { store });

    let app = handlers::router(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            // Request size limit: 1MB max payload (form submissions are tiny)
            .layer(RequestBodyLimitLayer::new(1024 * 1024))
            .layer(CorsLayer::permissive()),
    );

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Bank Portal API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
