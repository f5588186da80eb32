//! Wishlist store: products the shopper saved for later.

use std::rc::Rc;

use crate::catalog::Product;
use crate::events::{StoreEvent, Subscribers, SubscriptionId};

/// Ordered set of saved products, unique by product id.
#[derive(Debug, Default)]
pub struct WishlistStore {
    items: Vec<Rc<Product>>,
    subscribers: Subscribers,
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a product with this id is saved.
    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// Save a product. Does nothing if it is already saved.
    pub fn add_to_wishlist(&mut self, product: Rc<Product>) {
        if self.is_in_wishlist(product.id.as_str()) {
            return;
        }
        tracing::debug!(product_id = %product.id, "wishlist product added");
        let product_id = product.id.clone();
        self.items.push(product);
        self.subscribers.notify(&StoreEvent::WishlistAdded(product_id));
    }

    /// Drop a saved product. Does nothing if it is not saved.
    pub fn remove_from_wishlist(&mut self, product_id: &str) {
        if let Some(index) = self.items.iter().position(|p| p.id == product_id) {
            let removed = self.items.remove(index);
            tracing::debug!(product_id = %removed.id, "wishlist product removed");
            self.subscribers
                .notify(&StoreEvent::WishlistRemoved(removed.id.clone()));
        }
    }

    /// Remove the product if saved, save it otherwise.
    ///
    /// Returns whether the product is saved after the call.
    pub fn toggle_wishlist(&mut self, product: Rc<Product>) -> bool {
        if self.is_in_wishlist(product.id.as_str()) {
            self.remove_from_wishlist(product.id.as_str());
            false
        } else {
            self.add_to_wishlist(product);
            true
        }
    }

    /// Saved products in the order they were added.
    pub fn items(&self) -> &[Rc<Product>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
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
