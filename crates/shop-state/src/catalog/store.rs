//! Catalog store: the product list plus search and category filters.

use std::rc::Rc;

use crate::catalog::{seed_products, Product};
use crate::error::StoreError;
use crate::events::{StoreEvent, Subscribers, SubscriptionId};
use crate::money::Currency;

/// Default number of related products shown on a detail page.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Owns the master product list and the listing filters.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Rc<Product>>,
    search_query: String,
    selected_category: String,
    subscribers: Subscribers,
}

impl CatalogStore {
    /// Create a catalog over the given products, kept in the given order.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(Rc::new).collect(),
            ..Self::default()
        }
    }

    /// Create a catalog holding the demo seed list.
    pub fn seeded(currency: Currency) -> Self {
        Self::new(seed_products(currency))
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Rc<Product>] {
        &self.products
    }

    /// Current free-text query.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Current category filter. Empty means all categories.
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Replace the free-text query. Any string is accepted.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        tracing::debug!(query = %self.search_query, "catalog search query set");
        self.subscribers
            .notify(&StoreEvent::SearchQueryChanged(self.search_query.clone()));
    }

    /// Replace the category filter. Any string is accepted.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        tracing::debug!(category = %self.selected_category, "catalog category set");
        self.subscribers
            .notify(&StoreEvent::CategoryChanged(self.selected_category.clone()));
    }

    /// Reset both filters to empty.
    pub fn clear_filters(&mut self) {
        self.set_search_query("");
        self.set_category("");
    }

    /// Products passing the current query and category filters.
    ///
    /// The query matches case-insensitively against name or description; the
    /// category must match exactly. An empty filter is a no-op. Catalog order
    /// is preserved.
    pub fn filtered_products(&self) -> Vec<Rc<Product>> {
        let needle = self.search_query.to_lowercase();
        self.products
            .iter()
            .filter(|p| self.search_query.is_empty() || p.matches_lowercase(&needle))
            .filter(|p| self.selected_category.is_empty() || p.category == self.selected_category)
            .cloned()
            .collect()
    }

    /// Products flagged as best sellers, in catalog order.
    pub fn best_sellers(&self) -> Vec<Rc<Product>> {
        self.products
            .iter()
            .filter(|p| p.is_best_seller())
            .cloned()
            .collect()
    }

    /// Find a product by exact id.
    pub fn get_product_by_id(&self, id: &str) -> Option<Rc<Product>> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Like [`get_product_by_id`](Self::get_product_by_id), but a missing
    /// product is an error.
    pub fn require_product(&self, id: &str) -> Result<Rc<Product>, StoreError> {
        self.get_product_by_id(id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))
    }

    /// Up to `limit` other products in the same category, first-N in catalog
    /// order.
    pub fn get_related_products(&self, product: &Product, limit: usize) -> Vec<Rc<Product>> {
        self.products
            .iter()
            .filter(|p| p.id != product.id && p.category == product.category)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Distinct category labels in first-seen catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl Fn(&StoreEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Remove a change listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use std::cell::RefCell;

    fn catalog() -> CatalogStore {
        CatalogStore::seeded(Currency::USD)
    }

    fn names(products: &[Rc<Product>]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_return_full_catalog_in_order() {
        let catalog = catalog();
        let ids: Vec<_> = catalog
            .filtered_products()
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let mut catalog = catalog();
        catalog.set_search_query("SHIRT");
        assert_eq!(names(&catalog.filtered_products()), vec!["Classic T-Shirt"]);
    }

    #[test]
    fn test_query_matches_description() {
        let mut catalog = catalog();
        catalog.set_search_query("comfort");
        assert_eq!(
            names(&catalog.filtered_products()),
            vec!["Classic T-Shirt", "Slim Fit Jeans", "Running Shoes"]
        );
    }

    #[test]
    fn test_query_and_category_compose() {
        let mut catalog = catalog();
        catalog.set_search_query("shirt");
        catalog.set_category("clothing");
        assert_eq!(names(&catalog.filtered_products()), vec!["Classic T-Shirt"]);

        catalog.set_category("footwear");
        assert!(catalog.filtered_products().is_empty());
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let mut catalog = catalog();
        catalog.set_category("accessories");
        assert_eq!(
            names(&catalog.filtered_products()),
            vec!["Leather Wallet", "Backpack"]
        );

        catalog.set_category("Accessories");
        assert!(catalog.filtered_products().is_empty());
    }

    #[test]
    fn test_clear_filters() {
        let mut catalog = catalog();
        catalog.set_search_query("wallet");
        catalog.set_category("accessories");
        catalog.clear_filters();
        assert_eq!(catalog.search_query(), "");
        assert_eq!(catalog.selected_category(), "");
        assert_eq!(catalog.filtered_products().len(), 6);
    }

    #[test]
    fn test_best_sellers() {
        let catalog = catalog();
        assert_eq!(
            names(&catalog.best_sellers()),
            vec![
                "Classic T-Shirt",
                "Slim Fit Jeans",
                "Leather Wallet",
                "Wireless Headphones"
            ]
        );
    }

    #[test]
    fn test_absent_best_seller_flag_is_not_a_best_seller() {
        let catalog = CatalogStore::new(vec![Product::new(
            "x",
            "Mug",
            Money::new(999, Currency::USD),
            "kitchen",
        )]);
        assert!(catalog.best_sellers().is_empty());
    }

    #[test]
    fn test_get_product_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.get_product_by_id("3").unwrap().name, "Running Shoes");
        assert!(catalog.get_product_by_id("99").is_none());
        assert!(catalog.get_product_by_id("").is_none());
    }

    #[test]
    fn test_require_product() {
        let catalog = catalog();
        assert!(catalog.require_product("5").is_ok());
        assert!(matches!(
            catalog.require_product("99"),
            Err(StoreError::ProductNotFound(id)) if id == "99"
        ));
    }

    #[test]
    fn test_lookup_shares_the_catalog_product() {
        let catalog = catalog();
        let product = catalog.get_product_by_id("1").unwrap();
        assert!(Rc::ptr_eq(&product, &catalog.products()[0]));
    }

    #[test]
    fn test_related_products_exclude_self_and_share_category() {
        let catalog = catalog();
        let wallet = catalog.get_product_by_id("4").unwrap();
        let related = catalog.get_related_products(&wallet, DEFAULT_RELATED_LIMIT);
        assert_eq!(names(&related), vec!["Backpack"]);

        let headphones = catalog.get_product_by_id("5").unwrap();
        assert!(catalog
            .get_related_products(&headphones, DEFAULT_RELATED_LIMIT)
            .is_empty());
    }

    #[test]
    fn test_related_products_respect_limit() {
        let products = (0..8).map(|i| {
            Product::new(
                i.to_string(),
                format!("Sock {}", i),
                Money::new(500, Currency::USD),
                "clothing",
            )
        });
        let catalog = CatalogStore::new(products);
        let first = catalog.get_product_by_id("0").unwrap();

        let related = catalog.get_related_products(&first, 4);
        let ids: Vec<_> = related.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert!(catalog.get_related_products(&first, 0).is_empty());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        assert_eq!(
            catalog().categories(),
            vec!["clothing", "footwear", "accessories", "electronics"]
        );
    }

    #[test]
    fn test_filter_changes_notify_subscribers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut catalog = catalog();
        let sink = Rc::clone(&seen);
        catalog.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        catalog.set_search_query("bag");
        catalog.set_category("accessories");

        assert_eq!(
            *seen.borrow(),
            vec![
                StoreEvent::SearchQueryChanged("bag".to_string()),
                StoreEvent::CategoryChanged("accessories".to_string()),
            ]
        );
    }
}
