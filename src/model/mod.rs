//! Typed records persisted by the store.

pub mod cart;
pub mod product;

pub use cart::{Cart, CartItem};
pub use product::Product;

use serde::{Deserialize, Serialize};

/// Outcome of a delete operation.
///
/// A deletion failure after the existence check passes is reported as
/// `success: false` rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    /// Id of the record the caller asked to delete.
    pub deleted_id: String,
    /// Whether the underlying file deletion succeeded.
    pub success: bool,
}
