//! Cart store.

use std::rc::Rc;

use crate::cart::CartItem;
use crate::catalog::Product;
use crate::events::{StoreEvent, Subscribers, SubscriptionId};
use crate::money::{Currency, Money};

/// Ordered list of cart lines.
///
/// At most one line exists per (product id, selected variant, selected size)
/// triple. Line positions are the handles used by `remove_from_cart` and
/// `update_quantity`; an out-of-range position is ignored and reported by a
/// `false` return.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
    currency: Currency,
    subscribers: Subscribers,
}

impl CartStore {
    /// Create an empty cart totalling in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
            subscribers: Subscribers::new(),
        }
    }

    /// Add `quantity` of a product/variant/size combination.
    ///
    /// An existing line for the same triple has its quantity increased;
    /// otherwise a new line is appended. Quantity is not validated here.
    /// Returns the position of the affected line.
    pub fn add_to_cart(
        &mut self,
        product: Rc<Product>,
        quantity: i64,
        selected_variant: Option<String>,
        selected_size: Option<String>,
    ) -> usize {
        let existing = self.items.iter().position(|item| {
            item.matches(&product, selected_variant.as_deref(), selected_size.as_deref())
        });
        let product_id = product.id.clone();

        let index = match existing {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(quantity);
                tracing::debug!(
                    product_id = %product_id,
                    index,
                    quantity = item.quantity,
                    "cart line quantity increased"
                );
                index
            }
            None => {
                tracing::debug!(
                    product_id = %product_id,
                    quantity,
                    variant = ?selected_variant,
                    size = ?selected_size,
                    "cart line added"
                );
                self.items
                    .push(CartItem::new(product, quantity, selected_variant, selected_size));
                self.items.len() - 1
            }
        };

        self.subscribers.notify(&StoreEvent::CartItemAdded {
            index,
            product_id,
            quantity,
        });
        index
    }

    /// Add one unit with no variant or size selected.
    pub fn add(&mut self, product: Rc<Product>) -> usize {
        self.add_to_cart(product, 1, None, None)
    }

    /// Remove the line at `index`. Later lines shift down by one.
    ///
    /// Returns false, leaving the cart unchanged, if `index` is out of range.
    pub fn remove_from_cart(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "cart remove ignored: index out of range");
            return false;
        }

        let removed = self.items.remove(index);
        tracing::debug!(product_id = %removed.product.id, index, "cart line removed");
        self.subscribers.notify(&StoreEvent::CartItemRemoved {
            index,
            product_id: removed.product.id.clone(),
        });
        true
    }

    /// Set the quantity of the line at `index`.
    ///
    /// Zero or a negative quantity removes the line. Returns false, leaving
    /// the cart unchanged, if `index` is out of range.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_from_cart(index);
        }

        match self.items.get_mut(index) {
            Some(item) => {
                item.quantity = quantity;
                tracing::debug!(product_id = %item.product.id, index, quantity, "cart quantity set");
                self.subscribers
                    .notify(&StoreEvent::CartQuantityUpdated { index, quantity });
                true
            }
            None => {
                tracing::warn!(
                    index,
                    len = self.items.len(),
                    "cart quantity update ignored: index out of range"
                );
                false
            }
        }
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
        self.subscribers.notify(&StoreEvent::CartCleared);
    }

    /// Cart lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.items.get(index)
    }

    /// Total units across all lines (sum of quantities), saturating at the
    /// i64 bounds.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |count, item| count.saturating_add(item.quantity))
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`unique_item_count`](Self::unique_item_count).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency the total is reported in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of price times quantity over all lines.
    ///
    /// Lines priced in another currency cannot be summed and are left out
    /// (with a warning).
    pub fn total_price(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency), |total, item| {
                let line = item.line_total();
                total.try_add(&line).unwrap_or_else(|| {
                    tracing::warn!(
                        product_id = %item.product.id,
                        line_currency = %line.currency,
                        cart_currency = %total.currency,
                        "cart line left out of total: currency mismatch"
                    );
                    total
                })
            })
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
