//! Product persistence layer
//!
//! The HTTP handlers only see the [`ProductStore`] trait, so they can be
//! exercised against an in-memory fake without a real database.

pub mod sqlite;

pub use sqlite::SqliteProductStore;

use async_trait::async_trait;

use crate::models::Product;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Durable storage and retrieval of products, keyed by integer id.
///
/// Every operation is a single implicit commit; storage faults propagate
/// to the caller unhandled.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, in insertion order.
    async fn list_all(&self) -> Result<Vec<Product>, BoxError>;

    /// The product with that id, if any.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, BoxError>;

    /// Persist a new record. The store assigns the id; the returned
    /// product carries it.
    async fn add(&self, product: Product) -> Result<Product, BoxError>;

    /// Delete the identified record. Assumes the caller already confirmed
    /// existence.
    async fn remove(&self, product: &Product) -> Result<(), BoxError>;

    /// Write the record's mutable fields back to storage after in-place
    /// mutation.
    async fn save(&self, product: &Product) -> Result<(), BoxError>;
}
