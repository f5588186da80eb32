//! Cart line item.

use std::rc::Rc;

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One line in the cart: a product/variant/size combination and its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The catalog product, shared with the catalog.
    pub product: Rc<Product>,
    /// Quantity. Kept positive by `update_quantity`; `add_to_cart` does not
    /// check it.
    pub quantity: i64,
    /// Selected variant name, if any.
    pub selected_variant: Option<String>,
    /// Selected size label, if any.
    pub selected_size: Option<String>,
}

impl CartItem {
    pub fn new(
        product: Rc<Product>,
        quantity: i64,
        selected_variant: Option<String>,
        selected_size: Option<String>,
    ) -> Self {
        Self {
            product,
            quantity,
            selected_variant,
            selected_size,
        }
    }

    /// Whether this line is for the given product/variant/size triple.
    pub fn matches(
        &self,
        product: &Product,
        selected_variant: Option<&str>,
        selected_size: Option<&str>,
    ) -> bool {
        self.product.id == product.id
            && self.selected_variant.as_deref() == selected_variant
            && self.selected_size.as_deref() == selected_size
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}
