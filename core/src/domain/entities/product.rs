//! Product entity representing a catalog item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Product entity
///
/// Invariants `price > 0` and `stock >= 0` are enforced by the service layer
/// before a product reaches a repository; entity mutators assume already
/// validated values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Unit price, strictly positive
    pub price: f64,

    /// Optional image location
    pub image_url: Option<String>,

    /// Units on hand, never negative
    pub stock: i32,

    /// Timestamp when the product was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the product was last updated
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new Product with a generated id and fresh timestamps
    pub fn new(
        name: String,
        description: String,
        price: f64,
        image_url: Option<String>,
        stock: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            image_url,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied fields, leaving the rest untouched
    pub fn apply_changes(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
        image_url: Option<String>,
        stock: Option<i32>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(image_url) = image_url {
            self.image_url = Some(image_url);
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
        self.updated_at = Utc::now();
    }

    /// Remove `quantity` units from stock
    ///
    /// Fails with `InsufficientStock` when fewer than `quantity` units are on
    /// hand; stock never goes negative.
    pub fn reserve_stock(&mut self, quantity: i32) -> AppResult<()> {
        if quantity > self.stock {
            return Err(AppError::InsufficientStock {
                product: self.name.clone(),
                requested: quantity,
                available: self.stock,
            });
        }
        self.stock -= quantity;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product::new(
            "Widget".to_string(),
            "A widget".to_string(),
            9.99,
            None,
            10,
        )
    }

    #[test]
    fn test_new_product() {
        let product = sample_product();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.stock, 10);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_apply_changes_is_partial() {
        let mut product = sample_product();
        product.apply_changes(None, None, Some(19.99), None, Some(3));

        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 19.99);
        assert_eq!(product.stock, 3);
    }

    #[test]
    fn test_reserve_stock_success() {
        let mut product = sample_product();
        product.reserve_stock(4).unwrap();
        assert_eq!(product.stock, 6);
    }

    #[test]
    fn test_reserve_stock_insufficient() {
        let mut product = sample_product();
        let error = product.reserve_stock(11).unwrap_err();

        match error {
            AppError::InsufficientStock {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 11);
                assert_eq!(available, 10);
            }
            other => panic!("Expected InsufficientStock, got {:?}", other),
        }
        // Stock is untouched on failure
        assert_eq!(product.stock, 10);
    }
}
