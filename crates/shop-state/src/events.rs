//! Change notifications for store subscribers.
//!
//! Derived values (filtered products, cart totals, ...) are always computed on
//! read. Subscribers are only told *that* base state changed and how, so a view
//! knows when to read again.

use crate::ids::ProductId;
use std::fmt;

/// A mutation that a store has applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Catalog free-text query replaced.
    SearchQueryChanged(String),
    /// Catalog category filter replaced.
    CategoryChanged(String),
    /// A cart line was created or had its quantity increased.
    CartItemAdded {
        index: usize,
        product_id: ProductId,
        quantity: i64,
    },
    /// A cart line had its quantity set.
    CartQuantityUpdated { index: usize, quantity: i64 },
    /// A cart line was removed; later lines shifted down by one.
    CartItemRemoved { index: usize, product_id: ProductId },
    /// Every cart line was removed.
    CartCleared,
    /// A product was saved to the wishlist.
    WishlistAdded(ProductId),
    /// A product was dropped from the wishlist.
    WishlistRemoved(ProductId),
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&StoreEvent)>;

/// Listeners attached to one store.
///
/// Listeners run synchronously, in subscription order, after the mutation
/// has completed.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: impl Fn(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < len_before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub(crate) fn notify(&self, event: &StoreEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
