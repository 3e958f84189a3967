use std::sync::Arc;

use anyhow::Context;
use storage::{Database, DocumentStore, MemoryDocumentStore, PgDocumentStore};
use tokio::net::TcpListener;
use web::{
    build_router,
    config::{Config, StoreBackend},
    middleware::auth::ApiTokens,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting event finder API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store: Arc<dyn DocumentStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;

            tracing::info!(
                "Connecting to database at: {}",
                database_url.split('@').next_back().unwrap_or("unknown")
            );
            let db = Database::new(database_url)
                .await
                .context("Failed to initialize database")?;
            tracing::info!("Database connection established");

            tracing::info!("Running database migrations");
            db.run_migrations()
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Database migrations completed successfully");

            Arc::new(PgDocumentStore::new(db.pool().clone()))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store, data is lost on restart");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    let tokens = ApiTokens::from_comma_separated(&config.api_tokens);
    if tokens.is_empty() {
        tracing::warn!("No API tokens configured, every write endpoint will answer 401");
    }

    tracing::info!(shuffle = %config.suggestion_shuffle, "Suggestion shuffle mode");

    let state = AppState::new(
        store,
        Arc::new(tokens),
        config.admin_user_ids.clone(),
        config.suggestion_shuffle,
    );

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, build_router(state)).await?;

    Ok(())
}
