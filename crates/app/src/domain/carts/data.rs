//! Cart Data

use crate::domain::{carts::quantity::Quantity, products::records::ProductUuid};

/// Add-to-cart request. Merges into an existing line for the same product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_uuid: ProductUuid,
    pub quantity: Quantity,
}

/// Partial update of a cart item. `None` leaves the quantity unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartItemUpdate {
    pub quantity: Option<Quantity>,
}
