//! Product service module

mod service;

#[cfg(test)]
mod tests;

pub use service::{CreateProductData, ProductService, UpdateProductData};
