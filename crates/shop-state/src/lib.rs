//! Client-side state for the storefront demo.
//!
//! This crate holds the state the storefront views read and mutate:
//!
//! - **Catalog**: the fixed product list, search/category filtering,
//!   best sellers and related products
//! - **Cart**: line items keyed by product/variant/size, with item count and
//!   total price computed on read
//! - **Wishlist**: saved products, unique by id
//! - **Checkout**: the form record collected at checkout
//!
//! The stores are owned by a [`Storefront`] context built once at startup.
//! Derived values are plain query methods and are never cached; views that
//! want to react to changes subscribe to a store's [`StoreEvent`]s.
//!
//! # Example
//!
//! ```
//! use shop_state::prelude::*;
//!
//! let mut shop = Storefront::default();
//! let tshirt = shop.catalog().get_product_by_id("1").unwrap();
//! let jeans = shop.catalog().get_product_by_id("2").unwrap();
//!
//! shop.cart_mut().add_to_cart(tshirt.clone(), 2, None, None);
//! shop.cart_mut().add_to_cart(jeans, 1, None, None);
//! shop.cart_mut().add_to_cart(tshirt, 1, None, None);
//!
//! assert_eq!(shop.cart().item_count(), 4);
//! assert_eq!(shop.cart().total_price().display(), "$149.96");
//! ```

pub mod error;
pub mod events;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod context;
pub mod wishlist;

pub use config::StorefrontConfig;
pub use context::{ProductDetail, Storefront};
pub use error::StoreError;
pub use events::{StoreEvent, SubscriptionId};
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StorefrontConfig;
    pub use crate::context::{ProductDetail, Storefront};
    pub use crate::error::StoreError;
    pub use crate::events::{StoreEvent, Subscribers, SubscriptionId};
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{CatalogStore, Product, ProductVariant, DEFAULT_RELATED_LIMIT};

    // Cart
    pub use crate::cart::{CartItem, CartStore};

    // Wishlist
    pub use crate::wishlist::WishlistStore;

    // Checkout
    pub use crate::checkout::CheckoutInfo;
}
