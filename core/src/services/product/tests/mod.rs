//! Tests for the product service

mod mocks;
mod service_tests;
