//! Product API handlers
//!
//! One handler per HTTP verb. Writes go through the store as single
//! implicit commits; validation errors never reach the store.

use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::JsonRejection,
    response::IntoResponse,
};
use http::{StatusCode, header};

use super::internal;
use crate::error::AppError;
use crate::models::{Product, ProductCreate, ProductUpdate};
use crate::state::AppState;
use crate::util;

type ApiResult<T> = Result<Json<T>, AppError>;

/// GET /products - all products, in insertion order
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    let products = state.store.list_all().await.map_err(internal)?;
    Ok(Json(products))
}

/// POST /products - create a product
///
/// Responds 201 with the persisted product (store-assigned id included)
/// and a Location header pointing at the get-by-id route.
pub async fn create_product(
    State(state): State<AppState>,
    Json(data): Json<ProductCreate>,
) -> Result<impl IntoResponse, AppError> {
    let product = Product::from_create(data, util::now_millis());
    let created = state.store.add(product).await.map_err(internal)?;

    let location = format!("/products/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// GET /products/{id} - a single product, 404 if absent
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Product> {
    match state.store.find_by_id(id).await.map_err(internal)? {
        Some(product) => Ok(Json(product)),
        None => Err(AppError::not_found()),
    }
}

/// PUT /products/{id} - overwrite the mutable fields of a product
///
/// The id-mismatch check runs before the existence lookup, so a
/// mismatched payload never touches the store even when the path id does
/// not exist.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<ProductUpdate>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Ok(Json(data)) = body else {
        return Err(AppError::validation("O campo updateProductDTO é obrigatório."));
    };

    if id != data.id {
        return Err(AppError::validation("O ID do produto não corresponde."));
    }

    let Some(mut product) = state.store.find_by_id(id).await.map_err(internal)? else {
        return Err(AppError::not_found());
    };

    product.apply_update(data);
    state.store.save(&product).await.map_err(internal)?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /products/{id} - remove a product, 404 if absent
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let Some(product) = state.store.find_by_id(id).await.map_err(internal)? else {
        return Err(AppError::not_found());
    };

    state.store.remove(&product).await.map_err(internal)?;

    Ok(StatusCode::NO_CONTENT)
}
