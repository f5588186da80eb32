//! Shopping cart module.
//!
//! Contains the cart line type and the cart store.

mod item;
mod store;

pub use item::CartItem;
pub use store::CartStore;
