//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the ShopEasy
//! application, following the ports-and-adapters boundary defined in
//! `se_core`. It provides the concrete MySQL implementations of the
//! repository traits and connection pool management.
//!
//! Storage exceptions never cross this boundary: every SQLx error is caught
//! here, logged with its raw cause, and converted to a tagged
//! `AppError::Internal` failure.

pub mod database;

pub use database::{DatabasePool, MySqlCustomerRepository, MySqlProductRepository, PoolStatistics};
