//! # catalog-db: Database Layer for Catalog
//!
//! Database access for the `products` table, using SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Data Flow                               │
//! │                                                                         │
//! │  catalog CLI (insert → update → list → delete)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   catalog-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────┐  ┌─────────────┐  │   │
//! │  │   │   Database    │    │ ProductRepository │  │ Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ (product.rs)      │  │ (embedded)  │  │   │
//! │  │   └───────────────┘    └───────────────────┘  └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database (DATABASE_URL)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The product repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_core::Product;
//! use catalog_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("sqlite://catalog.db")).await?;
//!
//! let product = Product::new("Nike sneaker", 500.00);
//! db.products().create(&product).await?;
//! let all = db.products().find_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
pub use repository::MissingRowPolicy;
