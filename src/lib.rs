//! stock-server — product inventory REST service
//!
//! A small CRUD service over a single `products` table:
//!
//! - **HTTP API** (`api`): axum routes and handlers
//! - **Store** (`db`): `ProductStore` trait + SQLite implementation
//! - **Models** (`models`): `Product` entity and its create/update payloads
//! - **Errors** (`error`): unified `AppError` with HTTP status mapping

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
pub mod util;
