//! End-to-end lifecycle of one product through the public API.

use catalog_core::Product;
use catalog_db::{Database, DbConfig, DbError};

#[tokio::test]
async fn nike_sneaker_lifecycle() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let repo = db.products();

    let product = Product::new("Nike sneaker", 500.00);
    repo.create(&product).await.unwrap();

    let found = repo.find_by_id(&product.id).await.unwrap();
    assert_eq!(found.name, "Nike sneaker");
    assert_eq!(found.price, 500.00);

    let updated = Product::with_id(&product.id, "Updated nike sneaker", 1299.0);
    repo.update(&updated).await.unwrap();

    let found = repo.find_by_id(&product.id).await.unwrap();
    assert_eq!(found.name, "Updated nike sneaker");
    assert_eq!(found.price, 1299.0);

    repo.delete_by_id(&product.id).await.unwrap();

    let err = repo.find_by_id(&product.id).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { .. }), "got {err:?}");
    assert!(repo.find_all().await.unwrap().is_empty());

    db.close().await;
}

#[tokio::test]
async fn file_database_persists_across_handles() {
    let path = std::env::temp_dir().join(format!("catalog-{}.db", catalog_core::generate_product_id()));
    let url = format!("sqlite://{}", path.display());

    let product = Product::new("Nike sneaker", 500.00);

    let db = Database::new(DbConfig::new(&url)).await.unwrap();
    db.products().create(&product).await.unwrap();
    db.close().await;

    let db = Database::new(DbConfig::new(&url)).await.unwrap();
    assert_eq!(db.products().find_all().await.unwrap(), vec![product]);
    db.close().await;

    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
    }
}
