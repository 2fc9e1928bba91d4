//! # Demo Sequence
//!
//! ```text
//! create("Nike sneaker", 500.00)
//!      │
//!      ▼
//! update(update_id → "Updated nike sneaker", 1299)
//!      │
//!      ▼
//! find_all() ──► returned to caller
//!      │
//!      ▼
//! delete_by_id(delete_id)
//! ```
//!
//! The first failing step aborts the sequence.

use tracing::info;

use catalog_core::Product;
use catalog_db::{Database, DbResult};

use crate::config::CatalogConfig;

/// Runs the fixed CRUD sequence and returns the products listed before the
/// delete step.
pub async fn run(db: &Database, config: &CatalogConfig) -> DbResult<Vec<Product>> {
    let repo = db.products();

    let sneaker = Product::new("Nike sneaker", 500.00);
    repo.create(&sneaker).await?;
    info!(id = %sneaker.id, "Created product");

    let changes = Product::with_id(&config.update_id, "Updated nike sneaker", 1299.0);
    repo.update(&changes).await?;
    info!(id = %changes.id, "Updated product");

    let all = repo.find_all().await?;
    info!(count = all.len(), "Fetched products");

    repo.delete_by_id(&config.delete_id).await?;
    info!(id = %config.delete_id, "Deleted product");

    Ok(all)
}
