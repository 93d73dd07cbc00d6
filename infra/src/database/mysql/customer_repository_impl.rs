//! MySQL implementation of the CustomerRepository trait.
//!
//! Backed by the `customers` table:
//!
//! ```sql
//! CREATE TABLE customers (
//!     id         CHAR(36)     PRIMARY KEY,
//!     email      VARCHAR(255) NOT NULL UNIQUE,
//!     first_name VARCHAR(50)  NOT NULL,
//!     last_name  VARCHAR(50)  NOT NULL,
//!     phone      VARCHAR(20)  NULL,
//!     created_at TIMESTAMP(6) NOT NULL,
//!     updated_at TIMESTAMP(6) NOT NULL
//! );
//! ```
//!
//! Emails are stored in canonical lower-cased form, which makes the UNIQUE
//! index case-insensitive from the application's point of view.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use se_core::domain::entities::Customer;
use se_core::errors::{AppError, AppResult};
use se_core::repositories::CustomerRepository;

/// MySQL implementation of CustomerRepository
pub struct MySqlCustomerRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    /// Create a new MySQL customer repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Customer entity
    fn row_to_customer(row: &sqlx::mysql::MySqlRow) -> AppResult<Customer> {
        let id: String = row
            .try_get("id")
            .map_err(|e| AppError::internal(format!("Failed to get id: {}", e)))?;

        Ok(Customer {
            id: Uuid::parse_str(&id)
                .map_err(|e| AppError::internal(format!("Invalid customer UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| AppError::internal(format!("Failed to get email: {}", e)))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| AppError::internal(format!("Failed to get first_name: {}", e)))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| AppError::internal(format!("Failed to get last_name: {}", e)))?,
            phone: row
                .try_get("phone")
                .map_err(|e| AppError::internal(format!("Failed to get phone: {}", e)))?,
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
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        tracing::info!("Fetching all customers");

        let query = r#"
            SELECT id, email, first_name, last_name, phone, created_at, updated_at
            FROM customers
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch customers");
                AppError::internal("Failed to fetch customers")
            })?;

        let customers = rows
            .iter()
            .map(Self::row_to_customer)
            .collect::<AppResult<Vec<_>>>()?;

        tracing::info!(count = customers.len(), "Fetched customers");
        Ok(customers)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        tracing::info!(%id, "Fetching customer by id");

        let query = r#"
            SELECT id, email, first_name, last_name, phone, created_at, updated_at
            FROM customers
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch customer by id");
                AppError::internal("Failed to fetch customer")
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        tracing::info!(email = %email, "Fetching customer by email");

        let query = r#"
            SELECT id, email, first_name, last_name, phone, created_at, updated_at
            FROM customers
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email.to_lowercase())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch customer by email");
                AppError::internal("Failed to fetch customer")
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let query = "SELECT EXISTS(SELECT 1 FROM customers WHERE email = ?) AS `exists`";

        let row = sqlx::query(query)
            .bind(email.to_lowercase())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to check customer existence");
                AppError::internal("Failed to check customer existence")
            })?;

        let exists: i64 = row
            .try_get("exists")
            .map_err(|e| AppError::internal(format!("Failed to get existence result: {}", e)))?;

        Ok(exists == 1)
    }

    async fn create(&self, customer: Customer) -> AppResult<Customer> {
        tracing::info!(email = %customer.email, "Creating customer");

        // Friendlier message than the raw unique-key error; the insert below
        // still catches the violation if a concurrent create slips through.
        if self.exists_by_email(&customer.email).await? {
            tracing::warn!(email = %customer.email, "Customer already exists");
            return Err(AppError::validation(
                "A customer with this email already exists",
            ));
        }

        let query = r#"
            INSERT INTO customers (
                id, email, first_name, last_name, phone, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(customer.id.to_string())
            .bind(&customer.email)
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(&customer.phone)
            .bind(customer.created_at)
            .bind(customer.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    tracing::warn!(email = %customer.email, "Duplicate email on insert");
                    AppError::validation("A customer with this email already exists")
                }
                _ => {
                    tracing::error!(error = %e, "Failed to create customer");
                    AppError::internal("Failed to create customer")
                }
            })?;

        tracing::info!(id = %customer.id, "Customer created");
        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> AppResult<Customer> {
        tracing::info!(id = %customer.id, "Updating customer");

        if self.find_by_id(customer.id).await?.is_none() {
            tracing::warn!(id = %customer.id, "Customer not found for update");
            return Err(AppError::not_found("Customer"));
        }

        let query = r#"
            UPDATE customers
            SET email = ?, first_name = ?, last_name = ?, phone = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&customer.email)
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(&customer.phone)
            .bind(customer.updated_at)
            .bind(customer.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    AppError::validation("A customer with this email already exists")
                }
                _ => {
                    tracing::error!(error = %e, "Failed to update customer");
                    AppError::internal("Failed to update customer")
                }
            })?;

        tracing::info!(id = %customer.id, "Customer updated");
        Ok(customer)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        tracing::info!(%id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to delete customer");
                AppError::internal("Failed to delete customer")
            })?;

        let deleted = result.rows_affected() > 0;
        tracing::info!(%id, deleted, "Customer delete finished");
        Ok(deleted)
    }
}
