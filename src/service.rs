//! Shop service — the operation set behind the GraphQL surface.
//!
//! Every operation is a read-modify-write against a single record file;
//! there are no cross-record transactions. The read-modify-write sequence
//! is not serialized, so two concurrent mutations of the same cart are
//! last-writer-wins.

use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::context::ServiceContext;
use crate::error::ApiError;
use crate::model::{Cart, DeleteResult, Product};
use crate::store::RecordStore;

/// Product catalog and cart operations over the file-backed record store.
pub struct ShopService {
    ctx: ServiceContext,
    config: ServiceConfig,
}

impl ShopService {
    /// Creates a service over the given context and configuration.
    #[must_use]
    pub fn new(ctx: ServiceContext, config: ServiceConfig) -> Self {
        Self { ctx, config }
    }

    fn store(&self) -> RecordStore<'_> {
        RecordStore::new(&self.ctx, &self.config.data_dir)
    }

    /// Looks up a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no product file exists for the
    /// id.
    pub async fn get_product(&self, product_id: &str) -> Result<Product, ApiError> {
        self.store().load_product(product_id).await
    }

    /// Lists every product in the catalog, in directory-listing order.
    ///
    /// # Errors
    ///
    /// Returns an error when the listing or any record read fails.
    pub async fn get_all_products(&self) -> Result<Vec<Product>, ApiError> {
        self.store().list_products().await
    }

    /// Looks up a cart by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no cart file exists for the id.
    pub async fn get_cart(&self, cart_id: &str) -> Result<Cart, ApiError> {
        self.store().load_cart(cart_id).await
    }

    /// Creates a new empty cart with a freshly generated id.
    ///
    /// Generation retries until an id with no existing cart file comes up;
    /// an existing cart is never overwritten, however unlikely the
    /// collision.
    ///
    /// # Errors
    ///
    /// Returns an error when persisting the new cart fails.
    pub async fn create_cart(&self) -> Result<Cart, ApiError> {
        let store = self.store();
        let mut id = self.ctx.id_gen.generate_id();
        while store.cart_exists(&id).await {
            debug!(%id, "generated cart id already taken, retrying");
            id = self.ctx.id_gen.generate_id();
        }
        let cart = Cart::empty(id);
        store.save_cart(&cart).await?;
        Ok(cart)
    }

    /// Adds one unit of a product to a cart and returns the updated cart.
    ///
    /// An existing line item is incremented without consulting the catalog;
    /// only a first add loads the product and copies its name and price
    /// into the new item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the cart is missing, or when the
    /// product is missing on a first add.
    pub async fn add_product_to_cart(
        &self,
        cart_id: &str,
        product_id: &str,
    ) -> Result<Cart, ApiError> {
        let store = self.store();
        let mut cart = store.load_cart(cart_id).await?;
        if !cart.increment(product_id) {
            let product = store.load_product(product_id).await?;
            cart.push_product(&product);
        }
        cart.recompute_total();
        store.save_cart(&cart).await?;
        Ok(cart)
    }

    /// Removes one unit of an item from a cart and returns the updated
    /// cart.
    ///
    /// The entry disappears entirely when its quantity reaches zero. When
    /// the cart holds no entry for the id, the stored cart is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the cart is missing or when it
    /// has no item with the given id.
    pub async fn delete_product_from_cart(
        &self,
        cart_id: &str,
        cart_item_id: &str,
    ) -> Result<Cart, ApiError> {
        let store = self.store();
        let mut cart = store.load_cart(cart_id).await?;
        if !cart.decrement(cart_item_id) {
            return Err(ApiError::not_found("that product does not exist in your cart"));
        }
        cart.recompute_total();
        store.save_cart(&cart).await?;
        Ok(cart)
    }

    /// Deletes a cart file.
    ///
    /// A deletion failure after the existence check passes is reported as
    /// `success: false` instead of an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no cart file exists for the id.
    pub async fn delete_cart(&self, cart_id: &str) -> Result<DeleteResult, ApiError> {
        let store = self.store();
        if !store.cart_exists(cart_id).await {
            return Err(ApiError::not_found("cannot find that cart"));
        }
        let success = match store.delete_cart(cart_id).await {
            Ok(()) => true,
            Err(err) => {
                warn!(cart_id, %err, "cart deletion failed");
                false
            }
        };
        Ok(DeleteResult { deleted_id: cart_id.to_string(), success })
    }

    /// Deletes a product file, with the same soft-failure contract as
    /// [`ShopService::delete_cart`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no product file exists for the
    /// id.
    pub async fn delete_product(&self, product_id: &str) -> Result<DeleteResult, ApiError> {
        let store = self.store();
        if !store.product_exists(product_id).await {
            return Err(ApiError::not_found("cannot find that product"));
        }
        let success = match store.delete_product(product_id).await {
            Ok(()) => true,
            Err(err) => {
                warn!(product_id, %err, "product deletion failed");
                false
            }
        };
        Ok(DeleteResult { deleted_id: product_id.to_string(), success })
    }
}
