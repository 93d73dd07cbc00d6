//! Instrumented repository doubles for product service tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use crate::domain::entities::Product;
use crate::errors::AppResult;
use crate::repositories::{MockProductRepository, ProductRepository};

/// Counting wrapper around the in-memory product repository
pub struct InstrumentedProductRepository {
    inner: MockProductRepository,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl InstrumentedProductRepository {
    pub fn new() -> Self {
        Self {
            inner: MockProductRepository::new(),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductRepository for InstrumentedProductRepository {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        self.inner.find_by_id(id).await
    }

    async fn create(&self, product: Product) -> AppResult<Product> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create(product).await
    }

    async fn update(&self, product: Product) -> AppResult<Product> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update(product).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        self.inner.delete(id).await
    }
}
