//! Shared utilities and common types for the ShopEasy server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response envelope
//! - Validation utilities (email, phone)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, ServerConfig};
pub use types::ApiResponse;
pub use utils::validation;
