//! Application state for stock-server

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db::{ProductStore, SqliteProductStore};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Product persistence backend
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    /// Create a new AppState: connect the pool and run migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = SqlitePool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            store: Arc::new(SqliteProductStore::new(pool)),
        })
    }

    /// Create an AppState over an existing store (used by tests)
    pub fn with_store(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}
