//! Mock implementation of CustomerRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Customer;
use crate::errors::{AppError, AppResult};

use super::trait_::CustomerRepository;

/// In-memory customer repository for tests and local wiring
pub struct MockCustomerRepository {
    customers: Arc<RwLock<HashMap<Uuid, Customer>>>,
}

impl MockCustomerRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let customers = self.customers.read().await;
        let mut all: Vec<Customer> = customers.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        let needle = email.to_lowercase();
        let customers = self.customers.read().await;
        Ok(customers.values().find(|c| c.email == needle).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let needle = email.to_lowercase();
        let customers = self.customers.read().await;
        Ok(customers.values().any(|c| c.email == needle))
    }

    async fn create(&self, customer: Customer) -> AppResult<Customer> {
        let mut customers = self.customers.write().await;

        // Emails are stored lower-cased, so equality here is case-insensitive
        if customers.values().any(|c| c.email == customer.email) {
            return Err(AppError::validation(
                "A customer with this email already exists",
            ));
        }

        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> AppResult<Customer> {
        let mut customers = self.customers.write().await;

        if !customers.contains_key(&customer.id) {
            return Err(AppError::not_found("Customer"));
        }

        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut customers = self.customers.write().await;
        Ok(customers.remove(&id).is_some())
    }
}
