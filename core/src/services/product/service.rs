//! Product use-cases: catalog listing, lookup, creation, update and deletion.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::Product;
use crate::errors::{AppError, AppResult};
use crate::repositories::ProductRepository;

/// Input for creating a product
#[derive(Debug, Clone)]
pub struct CreateProductData {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub stock: i32,
}

/// Partial input for updating a product
#[derive(Debug, Clone, Default)]
pub struct UpdateProductData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub stock: Option<i32>,
}

/// Service for product business operations
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new product service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List every product
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        let products = self.repository.find_all().await?;
        info!(count = products.len(), "Fetched products");
        Ok(products)
    }

    /// Fetch a single product by id
    pub async fn get_product(&self, id: Uuid) -> AppResult<Product> {
        match self.repository.find_by_id(id).await? {
            Some(product) => Ok(product),
            None => {
                warn!(%id, "Product not found");
                Err(AppError::not_found("Product"))
            }
        }
    }

    /// Create a new product
    ///
    /// `price > 0` and `stock >= 0` are checked here, before any storage
    /// call; the repository never sees an invalid product.
    pub async fn create_product(&self, data: CreateProductData) -> AppResult<Product> {
        info!(name = %data.name, "Creating product");

        Self::validate_name(&data.name)?;
        Self::validate_price(data.price)?;
        Self::validate_stock(data.stock)?;

        let product = Product::new(
            data.name,
            data.description,
            data.price,
            data.image_url,
            data.stock,
        );
        let created = self.repository.create(product).await?;

        info!(id = %created.id, "Product created");
        Ok(created)
    }

    /// Update an existing product
    ///
    /// Supplied fields are validated first; the load doubles as the
    /// existence check (read-then-write, non-transactional).
    pub async fn update_product(&self, id: Uuid, data: UpdateProductData) -> AppResult<Product> {
        info!(%id, "Updating product");

        if let Some(name) = data.name.as_deref() {
            Self::validate_name(name)?;
        }
        if let Some(price) = data.price {
            Self::validate_price(price)?;
        }
        if let Some(stock) = data.stock {
            Self::validate_stock(stock)?;
        }

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product"))?;

        product.apply_changes(
            data.name,
            data.description,
            data.price,
            data.image_url,
            data.stock,
        );

        let updated = self.repository.update(product).await?;
        info!(id = %updated.id, "Product updated");
        Ok(updated)
    }

    /// Delete a product by id
    pub async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        info!(%id, "Deleting product");

        if self.repository.find_by_id(id).await?.is_none() {
            warn!(%id, "Product not found for deletion");
            return Err(AppError::not_found("Product"));
        }

        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Product"));
        }

        info!(%id, "Product deleted");
        Ok(())
    }

    fn validate_name(name: &str) -> AppResult<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Product name is required"));
        }
        Ok(())
    }

    fn validate_price(price: f64) -> AppResult<()> {
        if !price.is_finite() || price <= 0.0 {
            return Err(AppError::validation("Price must be greater than zero"));
        }
        Ok(())
    }

    fn validate_stock(stock: i32) -> AppResult<()> {
        if stock < 0 {
            return Err(AppError::validation("Stock cannot be negative"));
        }
        Ok(())
    }
}
