//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Statement Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create / update / find_by_id / find_all / delete_by_id                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  prepare (persistent = false) ──► bind ──► execute                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  statement finalized, connection returned to pool                      │
//! │       │                                                                 │
//! │       ├── Ok  → result to caller                                       │
//! │       └── Err → DbError to caller, no retry                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Statements are not cached on the connection: each one is used once and
//! dropped. No call opens a transaction, so every statement autocommits.
//!
//! Reads cast `price` to REAL. A table declared `price DECIMAL` has NUMERIC
//! affinity and stores whole-number prices as INTEGER.

use sqlx::sqlite::SqliteQueryResult;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::MissingRowPolicy;
use catalog_core::Product;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool, MissingRowPolicy::Ignore);
///
/// let product = Product::new("Nike sneaker", 500.00);
/// repo.create(&product).await?;
///
/// let found = repo.find_by_id(&product.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
    missing_row_policy: MissingRowPolicy,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool, missing_row_policy: MissingRowPolicy) -> Self {
        ProductRepository {
            pool,
            missing_row_policy,
        }
    }

    /// Inserts a new product row.
    ///
    /// ## Returns
    /// * `Ok(())` - Row written
    /// * `Err(DbError::UniqueViolation)` - A row with this id already exists
    pub async fn create(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query("INSERT INTO products (id, name, price) VALUES (?1, ?2, ?3)")
            .bind(&product.id)
            .bind(&product.name)
            .bind(product.price)
            .persistent(false)
            .execute(&self.pool)
            .await
            .map_err(|e| match DbError::from(e) {
                DbError::UniqueViolation { field, .. } => {
                    DbError::duplicate(field, &product.id)
                }
                other => other,
            })?;

        Ok(())
    }

    /// Updates name and price of the row matching `product.id`.
    ///
    /// An unknown id matches nothing. Under [`MissingRowPolicy::Ignore`]
    /// that is success and no row is created.
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, "Updating product");

        let result = sqlx::query("UPDATE products SET name = ?1, price = ?2 WHERE id = ?3")
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.id)
            .persistent(false)
            .execute(&self.pool)
            .await?;

        self.check_affected(&result, &product.id)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Product found
    /// * `Err(DbError::NotFound)` - No row with this id
    pub async fn find_by_id(&self, id: &str) -> DbResult<Product> {
        debug!(id = %id, "Fetching product");

        sqlx::query_as::<_, Product>(
            "SELECT id, name, CAST(price AS REAL) AS price FROM products WHERE id = ?1",
        )
            .bind(id)
            .persistent(false)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Lists every product.
    ///
    /// Row order is whatever the engine returns; there is no ORDER BY.
    /// An empty table yields an empty vector.
    pub async fn find_all(&self) -> DbResult<Vec<Product>> {
        let products =
            sqlx::query_as::<_, Product>("SELECT id, name, CAST(price AS REAL) AS price FROM products")
            .persistent(false)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Deletes the row matching `id`.
    ///
    /// Under [`MissingRowPolicy::Ignore`] an unknown id is success.
    pub async fn delete_by_id(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .persistent(false)
            .execute(&self.pool)
            .await?;

        self.check_affected(&result, id)
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .persistent(false)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    fn check_affected(&self, result: &SqliteQueryResult, id: &str) -> DbResult<()> {
        if result.rows_affected() == 0 {
            debug!(id = %id, policy = ?self.missing_row_policy, "Statement matched no rows");

            if self.missing_row_policy == MissingRowPolicy::NotFound {
                return Err(DbError::not_found("Product", id));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn setup(policy: MissingRowPolicy) -> Database {
        let config = DbConfig::in_memory().missing_row_policy(policy);
        Database::new(config).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_then_find_by_id() {
        let db = setup(MissingRowPolicy::Ignore).await;
        let repo = db.products();

        let product = Product::new("Nike sneaker", 500.00);
        repo.create(&product).await.unwrap();

        let found = repo.find_by_id(&product.id).await.unwrap();
        assert_eq!(found, product);
    }

    #[tokio::test]
    async fn test_create_duplicate_id_fails() {
        let db = setup(MissingRowPolicy::Ignore).await;
        let repo = db.products();

        let product = Product::new("Nike sneaker", 500.00);
        repo.create(&product).await.unwrap();

        let err = repo.create(&product).await.unwrap_err();
        match err {
            DbError::UniqueViolation { field, value } => {
                assert_eq!(field, "products.id");
                assert_eq!(value, product.id);
            }
            other => panic!("expected UniqueViolation, got {other:?}"),
        }
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_not_found() {
        let db = setup(MissingRowPolicy::Ignore).await;

        let err = db.products().find_by_id("missing").await.unwrap_err();
        match err {
            DbError::NotFound { entity, id } => {
                assert_eq!(entity, "Product");
                assert_eq!(id, "missing");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_touches_only_target_row() {
        let db = setup(MissingRowPolicy::Ignore).await;
        let repo = db.products();

        let target = Product::new("Nike sneaker", 500.00);
        let other = Product::new("Adidas runner", 320.50);
        repo.create(&target).await.unwrap();
        repo.create(&other).await.unwrap();

        let changes = Product::with_id(&target.id, "Updated nike sneaker", 1299.0);
        repo.update(&changes).await.unwrap();

        assert_eq!(repo.find_by_id(&target.id).await.unwrap(), changes);
        assert_eq!(repo.find_by_id(&other.id).await.unwrap(), other);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let db = setup(MissingRowPolicy::Ignore).await;
        let repo = db.products();

        let ghost = Product::new("Ghost", 1.0);
        repo.update(&ghost).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.find_by_id(&ghost.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_only_target_row() {
        let db = setup(MissingRowPolicy::Ignore).await;
        let repo = db.products();

        let target = Product::new("Nike sneaker", 500.00);
        let other = Product::new("Adidas runner", 320.50);
        repo.create(&target).await.unwrap();
        repo.create(&other).await.unwrap();

        repo.delete_by_id(&target.id).await.unwrap();

        assert!(repo.find_by_id(&target.id).await.unwrap_err().is_not_found());
        assert_eq!(repo.find_all().await.unwrap(), vec![other]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_ok() {
        let db = setup(MissingRowPolicy::Ignore).await;

        db.products().delete_by_id("missing").await.unwrap();
    }

    #[tokio::test]
    async fn test_find_all_empty_and_after_inserts() {
        let db = setup(MissingRowPolicy::Ignore).await;
        let repo = db.products();

        assert!(repo.find_all().await.unwrap().is_empty());

        let mut inserted = Vec::new();
        for i in 0..5 {
            let product = Product::new(format!("Product {i}"), i as f64 * 1.25);
            repo.create(&product).await.unwrap();
            inserted.push(product);
        }

        let mut all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 5);

        all.sort_by(|a, b| a.id.cmp(&b.id));
        inserted.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(all, inserted);
    }

    #[tokio::test]
    async fn test_negative_and_fractional_prices_round_trip() {
        let db = setup(MissingRowPolicy::Ignore).await;
        let repo = db.products();

        let product = Product::new("Refund voucher", -19.99);
        repo.create(&product).await.unwrap();

        assert_eq!(repo.find_by_id(&product.id).await.unwrap().price, -19.99);
    }

    #[tokio::test]
    async fn test_decimal_column_round_trips_whole_prices() {
        let config = DbConfig::in_memory().run_migrations(false);
        let db = Database::new(config).await.unwrap();
        sqlx::query("CREATE TABLE products (id TEXT PRIMARY KEY, name TEXT, price DECIMAL)")
            .execute(db.pool())
            .await
            .unwrap();
        let repo = db.products();

        let product = Product::new("Nike sneaker", 500.00);
        repo.create(&product).await.unwrap();
        assert_eq!(repo.find_by_id(&product.id).await.unwrap(), product);

        let changes = Product::with_id(&product.id, "Updated nike sneaker", 1299.0);
        repo.update(&changes).await.unwrap();
        assert_eq!(repo.find_by_id(&product.id).await.unwrap(), changes);
        assert_eq!(repo.find_all().await.unwrap(), vec![changes]);
    }

    #[tokio::test]
    async fn test_strict_policy_reports_missing_rows() {
        let db = setup(MissingRowPolicy::NotFound).await;
        let repo = db.products();

        let ghost = Product::new("Ghost", 1.0);
        assert!(repo.update(&ghost).await.unwrap_err().is_not_found());
        assert!(repo.delete_by_id(&ghost.id).await.unwrap_err().is_not_found());

        let product = Product::new("Nike sneaker", 500.00);
        repo.create(&product).await.unwrap();
        repo.update(&Product::with_id(&product.id, "Renamed", 10.0))
            .await
            .unwrap();
        repo.delete_by_id(&product.id).await.unwrap();
    }
}
