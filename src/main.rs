//! stock-server — product inventory REST service
//!
//! Long-running service exposing CRUD over a single `products` table
//! backed by a local SQLite database.

use stock_server::api;
use stock_server::config::Config;
use stock_server::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stock_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Starting stock-server (env: {})", config.environment);

    // Connect the database and run migrations
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("stock-server HTTP listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
