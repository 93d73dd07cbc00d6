pub mod customer;
pub mod product;

pub use customer::{CustomerRepository, MockCustomerRepository};
pub use product::{MockProductRepository, ProductRepository};
