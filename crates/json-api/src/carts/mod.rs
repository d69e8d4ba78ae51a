//! Cart
//!
//! The signed-in user's cart: add or merge a product, change a line's
//! quantity, view the aggregated cart and clear it.

mod errors;
pub(crate) mod handlers;
mod requests;
pub(crate) mod responses;

pub(crate) use handlers::*;
