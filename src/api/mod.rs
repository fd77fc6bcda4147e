//! API routes for stock-server

pub mod health;
pub mod product;

use axum::Router;
use axum::routing::get;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{AppError, ErrorCode};
use crate::state::AppState;

/// Log a store failure and mask it as a generic 500.
fn internal(e: impl std::fmt::Display) -> AppError {
    tracing::error!("Product store error: {e}");
    AppError::new(ErrorCode::InternalError)
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let products = Router::new()
        .route(
            "/products",
            get(product::list_products).post(product::create_product),
        )
        .route(
            "/products/{id}",
            get(product::get_product_by_id)
                .put(product::update_product)
                .delete(product::delete_product),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .merge(products)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(state)
}
