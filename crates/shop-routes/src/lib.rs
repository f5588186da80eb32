//! Route table for the storefront views.
//!
//! Binds URL paths to the pages of the storefront:
//!
//! ```text
//! /               -> Home
//! /products       -> ProductListing
//! /products/:id   -> ProductDetail (id passed as a prop)
//! /cart           -> Cart
//! /checkout       -> Checkout
//! ```
//!
//! # Usage
//!
//! ```rust
//! use shop_routes::prelude::*;
//!
//! let routes = storefront_routes();
//! let matched = routes.resolve("/products/3").unwrap();
//! assert_eq!(matched.view(), View::ProductDetail);
//! assert_eq!(matched.param("id"), Some("3"));
//! ```

mod error;
pub mod prelude;
mod route;
mod view;

pub use error::RouteError;
pub use route::*;
pub use view::View;
