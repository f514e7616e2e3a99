use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use connecthub_api::{
    app::{self, Storage},
    config::{self, StorageBackend},
    middleware,
};
use persistence::memory::InMemoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics()?;

    info!("Starting ConnectHub API v{}", env!("CARGO_PKG_VERSION"));

    let storage = match config.database.backend {
        StorageBackend::Postgres => {
            let pool = persistence::db::create_pool(&config.database.pool_config()).await?;

            info!("Running database migrations...");
            sqlx::migrate!("../persistence/src/migrations")
                .run(&pool)
                .await?;
            info!("Migrations completed");

            Storage::Postgres(pool)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data will be lost on restart");
            Storage::Memory(Arc::new(InMemoryStore::new()))
        }
    };

    let addr = config.socket_addr()?;
    let app = app::create_app(config, storage);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
