//! Views the router can show.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A storefront page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    ProductListing,
    /// Receives the `id` path parameter.
    ProductDetail,
    Cart,
    Checkout,
}

impl View {
    /// Route name the view is registered under.
    pub fn route_name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::ProductListing => "products",
            View::ProductDetail => "product-detail",
            View::Cart => "cart",
            View::Checkout => "checkout",
        }
    }

    /// Component name, as the view layer spells it.
    pub fn component_name(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::ProductListing => "ProductListing",
            View::ProductDetail => "ProductDetail",
            View::Cart => "Cart",
            View::Checkout => "Checkout",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.component_name())
    }
}
