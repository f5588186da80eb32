//! Prelude for convenient imports.
//!
//! ```rust
//! use shop_routes::prelude::*;
//! ```

pub use crate::{
    storefront_routes, RouteEntry, RouteError, RouteMatch, RouteMeta, RouteParams,
    RouteRegistry, View, STOREFRONT_ROUTES,
};
