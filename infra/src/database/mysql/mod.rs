//! MySQL repository implementations

pub mod customer_repository_impl;
pub mod product_repository_impl;

pub use customer_repository_impl::MySqlCustomerRepository;
pub use product_repository_impl::MySqlProductRepository;
