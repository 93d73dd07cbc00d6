//! Customer use-cases: listing, lookup, creation, update and deletion.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::Customer;
use crate::domain::value_objects::CustomerResponse;
use crate::errors::{AppError, AppResult};
use crate::repositories::CustomerRepository;

use se_shared::utils::validation::{is_valid_email, is_valid_phone, normalize_email};

/// Input for creating a customer
#[derive(Debug, Clone)]
pub struct CreateCustomerData {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

/// Partial input for updating a customer
///
/// The email is immutable after creation; only name components and phone can
/// change.
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomerData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// Service for customer business operations
///
/// Holds its repository port behind `Arc` so the same instance can be shared
/// across request handlers. All dependencies are passed at construction.
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Create a new customer service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List every customer as a response projection
    pub async fn list_customers(&self) -> AppResult<Vec<CustomerResponse>> {
        let customers = self.repository.find_all().await?;
        info!(count = customers.len(), "Fetched customers");
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    /// Fetch a single customer by id
    ///
    /// An absent row at the repository becomes `NotFound` here; the port
    /// itself reports absence as a successful `None`.
    pub async fn get_customer(&self, id: Uuid) -> AppResult<CustomerResponse> {
        match self.repository.find_by_id(id).await? {
            Some(customer) => Ok(customer.into()),
            None => {
                warn!(%id, "Customer not found");
                Err(AppError::not_found("Customer"))
            }
        }
    }

    /// Fetch a single customer by email (case-insensitive)
    pub async fn get_customer_by_email(&self, email: &str) -> AppResult<CustomerResponse> {
        let email = normalize_email(email);
        match self.repository.find_by_email(&email).await? {
            Some(customer) => Ok(customer.into()),
            None => {
                warn!(email = %email, "Customer not found by email");
                Err(AppError::not_found("Customer"))
            }
        }
    }

    /// Create a new customer
    ///
    /// Sequential short-circuiting pipeline:
    /// 1. field validation (no storage calls on bad input)
    /// 2. email uniqueness gate via `exists_by_email`; a repository failure
    ///    here propagates untouched and `create` is never invoked
    /// 3. persistence
    /// 4. projection to the response shape
    pub async fn create_customer(&self, data: CreateCustomerData) -> AppResult<CustomerResponse> {
        let email = normalize_email(&data.email);
        info!(email = %email, "Creating customer");

        Self::validate_email(&email)?;
        Self::validate_phone(data.phone.as_deref())?;

        if self.repository.exists_by_email(&email).await? {
            warn!(email = %email, "Email already registered");
            return Err(AppError::validation(
                "A customer with this email already exists",
            ));
        }

        let customer = Customer::new(email, data.first_name, data.last_name, data.phone);
        let created = self.repository.create(customer).await?;

        info!(id = %created.id, "Customer created");
        Ok(created.into())
    }

    /// Update an existing customer
    ///
    /// Read-then-write: the load doubles as the existence check and yields a
    /// friendlier `NotFound` than a blind write would. The check is not
    /// transactional with the write; the repository's own outcome remains
    /// authoritative under concurrent deletes.
    pub async fn update_customer(
        &self,
        id: Uuid,
        data: UpdateCustomerData,
    ) -> AppResult<CustomerResponse> {
        info!(%id, "Updating customer");

        Self::validate_phone(data.phone.as_deref())?;

        let mut customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Customer"))?;

        customer.rename(data.first_name, data.last_name);
        if data.phone.is_some() {
            customer.set_phone(data.phone);
        }

        let updated = self.repository.update(customer).await?;
        info!(id = %updated.id, "Customer updated");
        Ok(updated.into())
    }

    /// Delete a customer by id
    pub async fn delete_customer(&self, id: Uuid) -> AppResult<()> {
        info!(%id, "Deleting customer");

        if self.repository.find_by_id(id).await?.is_none() {
            warn!(%id, "Customer not found for deletion");
            return Err(AppError::not_found("Customer"));
        }

        // A concurrent delete between the check and this call reports
        // `false`; that is still NotFound, not a storage fault.
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Customer"));
        }

        info!(%id, "Customer deleted");
        Ok(())
    }

    fn validate_email(email: &str) -> AppResult<()> {
        if !is_valid_email(email) {
            return Err(AppError::validation("Please provide a valid email address"));
        }
        Ok(())
    }

    fn validate_phone(phone: Option<&str>) -> AppResult<()> {
        if let Some(phone) = phone {
            if !is_valid_phone(phone) {
                return Err(AppError::validation("Please provide a valid phone number"));
            }
        }
        Ok(())
    }
}
