//! Response construction helpers

pub mod error;

pub use error::{handle_app_error, validation_failure};
