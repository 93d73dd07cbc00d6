//! Business services orchestrating repository ports

pub mod customer;
pub mod product;

pub use customer::{CreateCustomerData, CustomerService, UpdateCustomerData};
pub use product::{CreateProductData, ProductService, UpdateProductData};
