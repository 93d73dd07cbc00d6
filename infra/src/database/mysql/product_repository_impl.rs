//! MySQL implementation of the ProductRepository trait.
//!
//! Backed by the `products` table:
//!
//! ```sql
//! CREATE TABLE products (
//!     id          CHAR(36)     PRIMARY KEY,
//!     name        VARCHAR(100) NOT NULL,
//!     description TEXT         NOT NULL,
//!     price       DOUBLE       NOT NULL,
//!     image_url   VARCHAR(255) NULL,
//!     stock       INT          NOT NULL,
//!     created_at  TIMESTAMP(6) NOT NULL,
//!     updated_at  TIMESTAMP(6) NOT NULL
//! );
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use se_core::domain::entities::Product;
use se_core::errors::{AppError, AppResult};
use se_core::repositories::ProductRepository;

/// MySQL implementation of ProductRepository
pub struct MySqlProductRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlProductRepository {
    /// Create a new MySQL product repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Product entity
    fn row_to_product(row: &sqlx::mysql::MySqlRow) -> AppResult<Product> {
        let id: String = row
            .try_get("id")
            .map_err(|e| AppError::internal(format!("Failed to get id: {}", e)))?;

        Ok(Product {
            id: Uuid::parse_str(&id)
                .map_err(|e| AppError::internal(format!("Invalid product UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| AppError::internal(format!("Failed to get name: {}", e)))?,
            description: row
                .try_get("description")
                .map_err(|e| AppError::internal(format!("Failed to get description: {}", e)))?,
            price: row
                .try_get("price")
                .map_err(|e| AppError::internal(format!("Failed to get price: {}", e)))?,
            image_url: row
                .try_get("image_url")
                .map_err(|e| AppError::internal(format!("Failed to get image_url: {}", e)))?,
            stock: row
                .try_get("stock")
                .map_err(|e| AppError::internal(format!("Failed to get stock: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| AppError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| AppError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        tracing::info!("Fetching all products");

        let query = r#"
            SELECT id, name, description, price, image_url, stock, created_at, updated_at
            FROM products
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch products");
                AppError::internal("Failed to fetch products")
            })?;

        let products = rows
            .iter()
            .map(Self::row_to_product)
            .collect::<AppResult<Vec<_>>>()?;

        tracing::info!(count = products.len(), "Fetched products");
        Ok(products)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        tracing::info!(%id, "Fetching product by id");

        let query = r#"
            SELECT id, name, description, price, image_url, stock, created_at, updated_at
            FROM products
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch product by id");
                AppError::internal("Failed to fetch product")
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_product(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, product: Product) -> AppResult<Product> {
        tracing::info!(name = %product.name, "Creating product");

        let query = r#"
            INSERT INTO products (
                id, name, description, price, image_url, stock, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(product.id.to_string())
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.image_url)
            .bind(product.stock)
            .bind(product.created_at)
            .bind(product.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create product");
                AppError::internal("Failed to create product")
            })?;

        tracing::info!(id = %product.id, "Product created");
        Ok(product)
    }

    async fn update(&self, product: Product) -> AppResult<Product> {
        tracing::info!(id = %product.id, "Updating product");

        if self.find_by_id(product.id).await?.is_none() {
            tracing::warn!(id = %product.id, "Product not found for update");
            return Err(AppError::not_found("Product"));
        }

        let query = r#"
            UPDATE products
            SET name = ?, description = ?, price = ?, image_url = ?, stock = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.image_url)
            .bind(product.stock)
            .bind(product.updated_at)
            .bind(product.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to update product");
                AppError::internal("Failed to update product")
            })?;

        tracing::info!(id = %product.id, "Product updated");
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        tracing::info!(%id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to delete product");
                AppError::internal("Failed to delete product")
            })?;

        let deleted = result.rows_affected() > 0;
        tracing::info!(%id, deleted, "Product delete finished");
        Ok(deleted)
    }
}
