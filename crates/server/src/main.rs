use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use subway_server::config::Config;
use subway_server::{AppState, create_router};
use subway_transit::SqliteStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let store = Arc::new(SqliteStore::connect(&config.database_url).await?);
    store.migrate().await?;

    let app = create_router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
