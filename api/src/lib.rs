//! ShopEasy HTTP API
//!
//! Presentation layer for the ShopEasy backend. This crate owns the single
//! point where the internal `AppResult`/`AppError` vocabulary is converted to
//! the external wire shape: success envelopes, error envelopes and HTTP
//! status codes. Nothing below this layer knows about transport concerns.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
