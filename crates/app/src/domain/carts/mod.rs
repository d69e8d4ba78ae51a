//! Carts

pub mod data;
pub mod errors;
pub mod quantity;
pub mod records;
mod repository;
pub mod service;
pub mod totals;

pub use errors::CartsServiceError;
pub use quantity::{Quantity, QuantityError};
pub use service::*;
pub use totals::CartTotals;
