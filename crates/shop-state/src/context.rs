//! The storefront context: one set of stores per running app.

use std::rc::Rc;

use crate::cart::CartStore;
use crate::catalog::{CatalogStore, Product};
use crate::config::StorefrontConfig;
use crate::error::StoreError;
use crate::wishlist::WishlistStore;

/// Owns the catalog, cart and wishlist stores.
///
/// Build one at startup and hand references to whatever needs the stores.
/// The stores never call each other; cross-store queries live here.
///
/// # Example
///
/// ```
/// use shop_state::{Storefront, StorefrontConfig};
///
/// let mut shop = Storefront::new(StorefrontConfig::new("Demo"));
/// let tshirt = shop.catalog().get_product_by_id("1").unwrap();
/// shop.cart_mut().add_to_cart(tshirt, 2, Some("Navy".into()), Some("M".into()));
/// assert_eq!(shop.cart().item_count(), 2);
/// ```
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    catalog: CatalogStore,
    cart: CartStore,
    wishlist: WishlistStore,
}

/// Everything the product detail page shows about one product.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub product: Rc<Product>,
    pub related: Vec<Rc<Product>>,
    pub in_wishlist: bool,
}

impl Storefront {
    /// Build the stores from a configuration.
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = if config.seed_catalog {
            CatalogStore::seeded(config.currency)
        } else {
            CatalogStore::default()
        };
        tracing::debug!(
            name = %config.name,
            products = catalog.products().len(),
            "storefront initialized"
        );

        Self {
            cart: CartStore::new(config.currency),
            wishlist: WishlistStore::new(),
            catalog,
            config,
        }
    }

    /// Build the stores around an explicit product list.
    pub fn with_products(
        config: StorefrontConfig,
        products: impl IntoIterator<Item = Product>,
    ) -> Self {
        Self {
            cart: CartStore::new(config.currency),
            wishlist: WishlistStore::new(),
            catalog: CatalogStore::new(products),
            config,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    pub fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    /// Product, related products and wishlist state for a detail page.
    pub fn product_detail(&self, id: &str) -> Result<ProductDetail, StoreError> {
        let product = self.catalog.require_product(id)?;
        let related = self
            .catalog
            .get_related_products(&product, self.config.related_products_limit);
        let in_wishlist = self.wishlist.is_in_wishlist(id);

        Ok(ProductDetail {
            product,
            related,
            in_wishlist,
        })
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}
