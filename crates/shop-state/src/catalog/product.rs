//! Product and variant types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are built once when the catalog is seeded and are never mutated
/// afterwards; the cart and wishlist hold shared references to them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Full description, searched alongside the name.
    pub description: String,
    /// Image references, in display order.
    pub images: Vec<String>,
    /// Color variants, in display order.
    pub variants: Vec<ProductVariant>,
    /// Size labels. Empty for sizeless goods.
    pub sizes: Vec<String>,
    /// Category label (e.g., "clothing").
    pub category: String,
    /// Whether the product can be purchased.
    pub in_stock: bool,
    /// Promotional best-seller flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_seller: Option<bool>,
}

impl Product {
    /// Create a new in-stock product with no media, variants or sizes.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            images: Vec::new(),
            variants: Vec::new(),
            sizes: Vec::new(),
            category: category.into(),
            in_stock: true,
            best_seller: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append an image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    /// Append a color variant.
    pub fn with_variant(mut self, name: impl Into<String>, color: impl Into<String>) -> Self {
        self.variants.push(ProductVariant::new(name, color));
        self
    }

    /// Replace the size labels.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the stock flag.
    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Set the best-seller flag.
    pub fn with_best_seller(mut self, best_seller: bool) -> Self {
        self.best_seller = Some(best_seller);
        self
    }

    /// Whether the best-seller flag is set. An absent flag counts as false.
    pub fn is_best_seller(&self) -> bool {
        self.best_seller.unwrap_or(false)
    }

    /// Whether this product is sold in sizes.
    pub fn has_sizes(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// Look up a variant by name.
    pub fn variant(&self, name: &str) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// A color variant (e.g., White / #FFFFFF).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductVariant {
    /// Variant name (e.g., "Navy").
    pub name: String,
    /// Color code (e.g., "#000080").
    pub color: String,
}

impl ProductVariant {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}
