//! Product repository trait defining the interface for catalog persistence.
//!
//! Same port contract as the customer side: absence is `Ok(None)`, only
//! storage faults are `Err`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Product;
use crate::errors::AppResult;

/// Repository trait for Product entity persistence operations
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch every product, most recently created first
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// Find a product by unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Product))` - product found
    /// * `Ok(None)` - no product with the given id
    /// * `Err(AppError::Internal)` - storage fault
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Persist a new product
    async fn create(&self, product: Product) -> AppResult<Product>;

    /// Persist changes to an existing product
    ///
    /// # Returns
    /// * `Ok(Product)` - the updated product
    /// * `Err(AppError::NotFound)` - no product with the given id
    /// * `Err(AppError::Internal)` - storage fault
    async fn update(&self, product: Product) -> AppResult<Product>;

    /// Delete a product
    ///
    /// # Returns
    /// * `Ok(true)` - product was deleted
    /// * `Ok(false)` - product did not exist
    /// * `Err(AppError::Internal)` - storage fault
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
