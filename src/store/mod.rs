//! Record store — file-per-record persistence for products and carts.
//!
//! Each record is one JSON file named `<id>.json`. Directory layout:
//!
//! ```text
//! <root>/
//!   ├── products/
//!   └── carts/
//! ```
//!
//! All I/O goes through `ctx.fs` so the store works against the live disk
//! adapter or the in-memory one. There is no index file; the directory
//! listing is the only enumeration mechanism.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::context::ServiceContext;
use crate::error::ApiError;
use crate::model::{Cart, Product};

/// Persistence layer for product and cart records.
pub struct RecordStore<'a> {
    ctx: &'a ServiceContext,
    root: PathBuf,
}

impl<'a> RecordStore<'a> {
    /// Creates a store rooted at the given directory.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, root: root.to_path_buf() }
    }

    /// Returns `true` when a product file exists for the id.
    pub async fn product_exists(&self, id: &str) -> bool {
        self.ctx.fs.exists(&self.product_path(id)).await
    }

    /// Loads a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no file exists for the id and
    /// [`ApiError::Decode`] when the file is not a valid product record.
    pub async fn load_product(&self, id: &str) -> Result<Product, ApiError> {
        let path = self.product_path(id);
        if !self.ctx.fs.exists(&path).await {
            return Err(ApiError::not_found("cannot find that product"));
        }
        self.read_record(&path, id).await
    }

    /// Saves a product as `<root>/products/<id>.json`, overwriting any
    /// previous version.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub async fn save_product(&self, product: &Product) -> Result<(), ApiError> {
        self.write_record(&self.product_path(&product.id), product).await
    }

    /// Deletes the product file for the id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Backend`] when the underlying deletion fails.
    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.ctx.fs.remove_file(&self.product_path(id)).await.map_err(ApiError::Backend)
    }

    /// Loads every product currently in the store.
    ///
    /// Records come back in directory-listing order; callers must not rely
    /// on any particular ordering. A missing products directory is an empty
    /// store, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory listing, a file read, or a record
    /// decode fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let dir = self.root.join("products");
        if !self.ctx.fs.exists(&dir).await {
            return Ok(Vec::new());
        }
        let entries = self.ctx.fs.list_dir(&dir).await.map_err(ApiError::Backend)?;
        let mut products = Vec::new();
        for name in entries {
            let Some(id) = name.strip_suffix(".json") else { continue };
            let id = id.to_string();
            products.push(self.read_record(&dir.join(&name), &id).await?);
        }
        Ok(products)
    }

    /// Returns `true` when a cart file exists for the id.
    pub async fn cart_exists(&self, id: &str) -> bool {
        self.ctx.fs.exists(&self.cart_path(id)).await
    }

    /// Loads a cart by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no file exists for the id and
    /// [`ApiError::Decode`] when the file is not a valid cart record.
    pub async fn load_cart(&self, id: &str) -> Result<Cart, ApiError> {
        let path = self.cart_path(id);
        if !self.ctx.fs.exists(&path).await {
            return Err(ApiError::not_found("cannot find that cart"));
        }
        self.read_record(&path, id).await
    }

    /// Saves a cart as `<root>/carts/<id>.json`, overwriting any previous
    /// version.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub async fn save_cart(&self, cart: &Cart) -> Result<(), ApiError> {
        self.write_record(&self.cart_path(&cart.id), cart).await
    }

    /// Deletes the cart file for the id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Backend`] when the underlying deletion fails.
    pub async fn delete_cart(&self, id: &str) -> Result<(), ApiError> {
        self.ctx.fs.remove_file(&self.cart_path(id)).await.map_err(ApiError::Backend)
    }

    fn product_path(&self, id: &str) -> PathBuf {
        self.root.join("products").join(format!("{id}.json"))
    }

    fn cart_path(&self, id: &str) -> PathBuf {
        self.root.join("carts").join(format!("{id}.json"))
    }

    async fn read_record<T: DeserializeOwned>(
        &self,
        path: &Path,
        id: &str,
    ) -> Result<T, ApiError> {
        let contents = self.ctx.fs.read_to_string(path).await.map_err(ApiError::Backend)?;
        serde_json::from_str(&contents)
            .map_err(|source| ApiError::Decode { id: id.to_string(), source })
    }

    async fn write_record<T: Serialize>(&self, path: &Path, record: &T) -> Result<(), ApiError> {
        let json =
            serde_json::to_string(record).map_err(|err| ApiError::Backend(Box::new(err)))?;
        self.ctx.fs.write(path, &json).await.map_err(ApiError::Backend)
    }
}
