//! Unit tests for mock product repository

use uuid::Uuid;

use crate::domain::entities::Product;
use crate::errors::AppError;
use crate::repositories::product::{MockProductRepository, ProductRepository};

fn widget() -> Product {
    Product::new(
        "Widget".to_string(),
        "A useful widget".to_string(),
        9.99,
        None,
        10,
    )
}

#[tokio::test]
async fn test_mock_repository_create_and_find() {
    let repo = MockProductRepository::new();

    let product = widget();
    repo.create(product.clone()).await.unwrap();

    let found = repo.find_by_id(product.id).await.unwrap();
    assert_eq!(found, Some(product));
}

#[tokio::test]
async fn test_mock_repository_absent_id_is_success_none() {
    let repo = MockProductRepository::new();

    let found = repo.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_mock_repository_update_unknown_is_not_found() {
    let repo = MockProductRepository::new();

    let result = repo.update(widget()).await;
    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_mock_repository_delete_reports_existence() {
    let repo = MockProductRepository::new();
    let product = widget();
    repo.create(product.clone()).await.unwrap();

    assert!(repo.delete(product.id).await.unwrap());
    assert!(!repo.delete(product.id).await.unwrap());
}
