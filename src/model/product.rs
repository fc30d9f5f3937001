//! Product record.

use serde::{Deserialize, Serialize};

/// A catalog product, stored as one file named by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, immutable once created.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price, non-negative.
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::Product;

    #[test]
    fn decodes_from_stored_json() {
        let product: Product =
            serde_json::from_str(r#"{"id":"p1","name":"Bananas","price":9.5}"#).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.name, "Bananas");
        assert!((product.price - 9.5).abs() < f64::EPSILON);
    }
}
