//! SqliteProductStore tests against an in-memory database.

use sqlx::sqlite::SqlitePoolOptions;

use stock_server::db::{ProductStore, SqliteProductStore};
use stock_server::models::{NEVER_UPDATED, Product, ProductCreate, ProductUpdate};

async fn store() -> SqliteProductStore {
    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    SqliteProductStore::new(pool)
}

fn new_product(name: &str, now: i64) -> Product {
    Product::from_create(
        ProductCreate {
            name: name.into(),
            description: format!("{name} description"),
            quantity: 10,
            price: 20.0,
        },
        now,
    )
}

#[tokio::test]
async fn test_add_assigns_sequential_ids() {
    let store = store().await;

    let first = store.add(new_product("Produto 1", 1_000)).await.unwrap();
    let second = store.add(new_product("Produto 2", 2_000)).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.date_added, 1_000);
    assert_eq!(first.date_updated, NEVER_UPDATED);
}

#[tokio::test]
async fn test_find_by_id_roundtrip() {
    let store = store().await;

    let created = store.add(new_product("Produto 1", 1_000)).await.unwrap();

    let found = store.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));

    let missing = store.find_by_id(999).await.unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn test_list_all_in_insertion_order() {
    let store = store().await;

    store.add(new_product("Produto 1", 1_000)).await.unwrap();
    store.add(new_product("Produto 2", 2_000)).await.unwrap();
    store.add(new_product("Produto 3", 3_000)).await.unwrap();

    let products = store.list_all().await.unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Produto 1", "Produto 2", "Produto 3"]);
}

#[tokio::test]
async fn test_save_overwrites_mutable_fields() {
    let store = store().await;

    let mut product = store.add(new_product("Produto 1", 1_000)).await.unwrap();
    product.apply_update(ProductUpdate {
        id: product.id,
        name: "Produto Atualizado".into(),
        description: "Desc Atualizada".into(),
        quantity: 5,
        price: 15.0,
    });
    store.save(&product).await.unwrap();

    let reloaded = store.find_by_id(product.id).await.unwrap().unwrap();
    assert_eq!(reloaded.name, "Produto Atualizado");
    assert_eq!(reloaded.description, "Desc Atualizada");
    assert_eq!(reloaded.quantity, 5);
    assert_eq!(reloaded.price, 15.0);
    assert_eq!(reloaded.date_added, 1_000);
    assert_eq!(reloaded.date_updated, NEVER_UPDATED);
}

#[tokio::test]
async fn test_remove_deletes_the_row() {
    let store = store().await;

    let product = store.add(new_product("Produto 1", 1_000)).await.unwrap();
    store.remove(&product).await.unwrap();

    assert_eq!(store.find_by_id(product.id).await.unwrap(), None);
    assert!(store.list_all().await.unwrap().is_empty());
}
