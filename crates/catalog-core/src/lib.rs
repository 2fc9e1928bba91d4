//! # catalog-core: Product Value Type
//!
//! Pure types shared by the database layer and the CLI. Nothing in this
//! crate touches a database, file or network.
//!
//! ## Modules
//!
//! - [`types`] - The [`Product`] record and id generation
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::Product;
//!
//! let product = Product::new("Nike sneaker", 500.00);
//! assert_eq!(product.name, "Nike sneaker");
//! assert_eq!(product.id.len(), 36);
//! ```

pub mod types;

pub use types::*;
