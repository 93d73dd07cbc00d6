//! Customer repository trait defining the interface for customer persistence.
//!
//! This is the port side of the ports-and-adapters boundary: the service
//! layer depends on this trait, and the infrastructure layer supplies the
//! concrete implementation. Absence of a row is a successful `None`, never a
//! failure; only storage faults produce `Err`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Customer;
use crate::errors::AppResult;

/// Repository trait for Customer entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use se_core::repositories::CustomerRepository;
/// use se_core::domain::entities::Customer;
/// use se_core::errors::AppResult;
///
/// struct MySqlCustomerRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl CustomerRepository for MySqlCustomerRepository {
///     async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
///     # async fn find_all(&self) -> AppResult<Vec<Customer>> { Ok(vec![]) }
///     # async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> { Ok(None) }
///     # async fn exists_by_email(&self, email: &str) -> AppResult<bool> { Ok(false) }
///     # async fn create(&self, customer: Customer) -> AppResult<Customer> { Ok(customer) }
///     # async fn update(&self, customer: Customer) -> AppResult<Customer> { Ok(customer) }
///     # async fn delete(&self, id: Uuid) -> AppResult<bool> { Ok(false) }
/// }
/// ```
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Fetch every customer, most recently created first
    ///
    /// # Returns
    /// * `Ok(Vec<Customer>)` - possibly empty; no rows is not an error
    /// * `Err(AppError::Internal)` - storage fault
    async fn find_all(&self) -> AppResult<Vec<Customer>>;

    /// Find a customer by unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Customer))` - customer found
    /// * `Ok(None)` - no customer with the given id
    /// * `Err(AppError::Internal)` - storage fault
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>>;

    /// Find a customer by email
    ///
    /// The lookup is case-insensitive: the argument is compared in canonical
    /// lower-cased form.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>>;

    /// Check whether a customer exists with the given email
    ///
    /// # Returns
    /// * `Ok(true)` / `Ok(false)` - existence result
    /// * `Err(AppError::Internal)` - storage fault
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Persist a new customer
    ///
    /// # Returns
    /// * `Ok(Customer)` - the created customer
    /// * `Err(AppError::Validation)` - email uniqueness violated
    /// * `Err(AppError::Internal)` - storage fault
    async fn create(&self, customer: Customer) -> AppResult<Customer>;

    /// Persist changes to an existing customer
    ///
    /// # Returns
    /// * `Ok(Customer)` - the updated customer
    /// * `Err(AppError::NotFound)` - no customer with the given id
    /// * `Err(AppError::Internal)` - storage fault
    async fn update(&self, customer: Customer) -> AppResult<Customer>;

    /// Delete a customer
    ///
    /// # Returns
    /// * `Ok(true)` - customer was deleted
    /// * `Ok(false)` - customer did not exist
    /// * `Err(AppError::Internal)` - storage fault
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
