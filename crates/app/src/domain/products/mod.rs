//! Products

pub mod data;
pub mod errors;
pub mod price;
pub mod records;
mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use service::*;

pub(crate) use repository::{PgProductsRepository, try_get_amount};
