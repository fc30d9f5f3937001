//! Cart and cart item records, with the quantity bookkeeping the mutations
//! share.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// A line entry within a cart: a product snapshot plus quantity.
///
/// `name` and `price` are copied from the product when the item is first
/// added and never re-synced afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Id of the product this entry refers to.
    pub id: String,
    /// Product name at the time of first add.
    pub name: String,
    /// Number of units; an entry never persists at quantity 0.
    pub quantity: u32,
    /// Unit price at the time of first add.
    pub price: f64,
}

/// A shopping cart.
///
/// Items stay in first-seen order and no two entries share an id. After any
/// successful mutation persists, `total_sum` equals Σ(quantity × price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Unique cart identifier.
    pub id: String,
    /// Line items in first-seen order.
    pub items: Vec<CartItem>,
    /// Serialized as `totalSum` to match the stored record shape.
    pub total_sum: f64,
}

impl Cart {
    /// Creates an empty cart with a zero total.
    #[must_use]
    pub fn empty(id: impl Into<String>) -> Self {
        Self { id: id.into(), items: Vec::new(), total_sum: 0.0 }
    }

    /// Increments the quantity of the entry with the given id.
    ///
    /// Returns `false` when the cart has no entry for the id; the caller
    /// then appends a fresh snapshot via [`Cart::push_product`].
    pub fn increment(&mut self, item_id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => {
                item.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Appends a new entry with quantity 1, copying the product snapshot.
    pub fn push_product(&mut self, product: &Product) {
        self.items.push(CartItem {
            id: product.id.clone(),
            name: product.name.clone(),
            quantity: 1,
            price: product.price,
        });
    }

    /// Decrements the entry with the given id, dropping it entirely when the
    /// quantity reaches zero.
    ///
    /// Returns `false` when no entry matched.
    pub fn decrement(&mut self, item_id: &str) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == item_id) else {
            return false;
        };
        self.items[index].quantity -= 1;
        if self.items[index].quantity == 0 {
            self.items.remove(index);
        }
        true
    }

    /// Recomputes `total_sum` from the current items.
    ///
    /// Mutations call this before persisting; the stored record never holds
    /// a stale total.
    pub fn recompute_total(&mut self) {
        self.total_sum =
            self.items.iter().map(|item| f64::from(item.quantity) * item.price).sum();
    }
}
