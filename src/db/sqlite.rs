//! SQLite-backed product store

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{BoxError, ProductStore};
use crate::models::Product;

/// [`ProductStore`] over a `sqlx` SQLite pool
#[derive(Clone)]
pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    async fn list_all(&self) -> Result<Vec<Product>, BoxError> {
        // AUTOINCREMENT ids are monotonic, so id order is insertion order
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, quantity, price, date_added, date_updated
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, BoxError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, quantity, price, date_added, date_updated
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn add(&self, product: Product) -> Result<Product, BoxError> {
        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO products (name, description, quantity, price, date_added, date_updated)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.price)
        .bind(product.date_added)
        .bind(product.date_updated)
        .fetch_one(&self.pool)
        .await?;

        Ok(Product {
            id: row.0,
            ..product
        })
    }

    async fn remove(&self, product: &Product) -> Result<(), BoxError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn save(&self, product: &Product) -> Result<(), BoxError> {
        // id and date_added are immutable after insert
        sqlx::query(
            r#"
            UPDATE products
            SET name = $1, description = $2, quantity = $3, price = $4, date_updated = $5
            WHERE id = $6
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.price)
        .bind(product.date_updated)
        .bind(product.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
