//! Product model and its create/update payloads

use serde::{Deserialize, Serialize};

/// `date_updated` sentinel for a product that has never been updated
pub const NEVER_UPDATED: i64 = 0;

/// Product entity, one row in the `products` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Store-assigned id, immutable after creation
    pub id: i64,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    /// Creation timestamp (epoch ms), never modified afterward
    pub date_added: i64,
    /// Last-update timestamp (epoch ms), [`NEVER_UPDATED`] until then
    pub date_updated: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
}

/// Update product payload
///
/// Carries the id redundantly; the handler rejects the request when it
/// does not match the path id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
}

impl Product {
    /// Build a not-yet-persisted product from a create payload.
    ///
    /// The id is assigned by the store on insert; until then it is 0.
    pub fn from_create(data: ProductCreate, now: i64) -> Self {
        Self {
            id: 0,
            name: data.name,
            description: data.description,
            quantity: data.quantity,
            price: data.price,
            date_added: now,
            date_updated: NEVER_UPDATED,
        }
    }

    /// Overwrite the mutable fields from an update payload.
    ///
    /// `id` and `date_added` are untouched. `date_updated` is left alone
    /// as well, matching the update endpoint's observed behavior.
    pub fn apply_update(&mut self, data: ProductUpdate) {
        self.name = data.name;
        self.description = data.description;
        self.quantity = data.quantity;
        self.price = data.price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_create_sets_timestamps() {
        let data = ProductCreate {
            name: "Produto 1".into(),
            description: "Desc 1".into(),
            quantity: 10,
            price: 20.0,
        };
        let product = Product::from_create(data, 1_700_000_000_000);

        assert_eq!(product.id, 0);
        assert_eq!(product.date_added, 1_700_000_000_000);
        assert_eq!(product.date_updated, NEVER_UPDATED);
    }

    #[test]
    fn test_apply_update_leaves_id_and_timestamps() {
        let mut product = Product {
            id: 1,
            name: "Produto 1".into(),
            description: "Desc 1".into(),
            quantity: 10,
            price: 20.0,
            date_added: 1_700_000_000_000,
            date_updated: NEVER_UPDATED,
        };

        product.apply_update(ProductUpdate {
            id: 1,
            name: "Produto Atualizado".into(),
            description: "Desc Atualizada".into(),
            quantity: 5,
            price: 15.0,
        });

        assert_eq!(product.name, "Produto Atualizado");
        assert_eq!(product.description, "Desc Atualizada");
        assert_eq!(product.quantity, 5);
        assert_eq!(product.price, 15.0);
        assert_eq!(product.id, 1);
        assert_eq!(product.date_added, 1_700_000_000_000);
        assert_eq!(product.date_updated, NEVER_UPDATED);
    }
}
