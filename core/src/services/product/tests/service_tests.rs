//! Unit tests for product service

use std::sync::Arc;

use uuid::Uuid;

use crate::errors::AppError;
use crate::repositories::MockProductRepository;
use crate::services::product::{CreateProductData, ProductService, UpdateProductData};

use super::mocks::InstrumentedProductRepository;

fn widget() -> CreateProductData {
    CreateProductData {
        name: "Widget".to_string(),
        description: "A useful widget".to_string(),
        price: 9.99,
        image_url: None,
        stock: 10,
    }
}

#[tokio::test]
async fn test_create_product_round_trip() {
    let repository = Arc::new(MockProductRepository::new());
    let service = ProductService::new(repository);

    let created = service.create_product(widget()).await.unwrap();
    let fetched = service.get_product(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Widget");
    assert_eq!(fetched.price, 9.99);
    assert_eq!(fetched.stock, 10);
}

#[tokio::test]
async fn test_create_product_rejects_non_positive_price() {
    let repository = Arc::new(InstrumentedProductRepository::new());
    let service = ProductService::new(repository.clone());

    for price in [0.0, -1.0, f64::NAN] {
        let result = service
            .create_product(CreateProductData {
                price,
                ..widget()
            })
            .await;

        match result.unwrap_err() {
            AppError::Validation { message } => {
                assert!(message.contains("greater than zero"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    // The storage layer was never reached
    assert_eq!(repository.create_calls(), 0);
}

#[tokio::test]
async fn test_create_product_rejects_negative_stock() {
    let repository = Arc::new(InstrumentedProductRepository::new());
    let service = ProductService::new(repository.clone());

    let result = service
        .create_product(CreateProductData {
            stock: -1,
            ..widget()
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(repository.create_calls(), 0);
}

#[tokio::test]
async fn test_update_product_partial() {
    let repository = Arc::new(MockProductRepository::new());
    let service = ProductService::new(repository);

    let created = service.create_product(widget()).await.unwrap();

    let updated = service
        .update_product(
            created.id,
            UpdateProductData {
                price: Some(19.99),
                stock: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Widget");
    assert_eq!(updated.price, 19.99);
    assert_eq!(updated.stock, 3);
}

#[tokio::test]
async fn test_update_product_invalid_price_skips_write() {
    let repository = Arc::new(InstrumentedProductRepository::new());
    let service = ProductService::new(repository.clone());

    let created = service.create_product(widget()).await.unwrap();

    let result = service
        .update_product(
            created.id,
            UpdateProductData {
                price: Some(-5.0),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(repository.update_calls(), 0);
}

#[tokio::test]
async fn test_update_product_absent_is_not_found() {
    let repository = Arc::new(MockProductRepository::new());
    let service = ProductService::new(repository);

    let result = service
        .update_product(
            Uuid::new_v4(),
            UpdateProductData {
                stock: Some(1),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_product_absent_is_not_found() {
    let repository = Arc::new(MockProductRepository::new());
    let service = ProductService::new(repository);

    let result = service.delete_product(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_product_then_get_is_not_found() {
    let repository = Arc::new(MockProductRepository::new());
    let service = ProductService::new(repository);

    let created = service.create_product(widget()).await.unwrap();
    service.delete_product(created.id).await.unwrap();

    let result = service.get_product(created.id).await;
    assert!(matches!(result, Err(AppError::NotFound { .. })));
}
