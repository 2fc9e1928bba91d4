//! # Domain Types
//!
//! ## Identity
//! A product's `id` is a UUID v4 string assigned once by [`Product::new`].
//! Nothing regenerates it afterwards; updates and deletes address rows by it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Product
// =============================================================================

/// A product row.
///
/// Serializes as `{"id": "...", "name": "...", "price": 500.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price. Not validated: negative values are stored as given.
    pub price: f64,
}

impl Product {
    /// Creates a product with a freshly generated id.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Product {
            id: generate_product_id(),
            name: name.into(),
            price,
        }
    }

    /// Builds a product record for an id that already exists.
    ///
    /// ## Usage
    /// ```rust
    /// use catalog_core::Product;
    ///
    /// let changes = Product::with_id(
    ///     "f66e6516-ee49-44e9-a0cb-883599d9dd9e",
    ///     "Updated nike sneaker",
    ///     1299.0,
    /// );
    /// assert_eq!(changes.id, "f66e6516-ee49-44e9-a0cb-883599d9dd9e");
    /// ```
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// Generates a new product ID.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
