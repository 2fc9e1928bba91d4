//! # Repository Module
//!
//! Database repository implementations for Catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog CLI                                                            │
//! │       │                                                                 │
//! │       │  db.products().find_all()                                       │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create(&self, product)                                            │
//! │  ├── update(&self, product)                                            │
//! │  ├── find_by_id(&self, id)                                             │
//! │  ├── find_all(&self)                                                   │
//! │  └── delete_by_id(&self, id)                                           │
//! │       │                                                                 │
//! │       │  One autocommit statement per call                              │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD

pub mod product;

/// What `update` and `delete_by_id` do when their statement matches no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRowPolicy {
    /// Zero affected rows is success.
    #[default]
    Ignore,
    /// Zero affected rows is [`DbError::NotFound`](crate::DbError::NotFound).
    NotFound,
}
