//! Server binary: load settings, open the store, mount routes, serve.

use catalog_api::{app, connect_pool, ensure_tables, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_api=info")),
        )
        .init();

    let settings = Settings::from_env();
    let pool = connect_pool(&settings.database_url, 5).await?;
    ensure_tables(&pool).await?;

    let app = app(&settings, pool);
    let listener = TcpListener::bind("0.0.0.0:8000").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
