//! Product catalog module.
//!
//! Contains the product types, the seed list and the catalog store.

mod product;
mod seed;
mod store;

pub use product::{Product, ProductVariant};
pub use seed::seed_products;
pub use store::{CatalogStore, DEFAULT_RELATED_LIMIT};
