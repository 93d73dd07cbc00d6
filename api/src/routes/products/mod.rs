//! Product route handlers, one file per operation

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::create_product;
pub use delete::delete_product;
pub use get::get_product;
pub use list::list_products;
pub use update::update_product;
