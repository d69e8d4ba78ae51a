//! Cart Records

use jiff::Timestamp;

use crate::{
    domain::{
        carts::quantity::Quantity,
        products::records::{ProductImages, ProductUuid},
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// Product detail shown alongside a cart item.
#[derive(Debug, Clone)]
pub struct CartItemProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub slug: String,
    pub category_name: String,
    pub subcategory_name: String,
    pub price: u64,
    pub images: ProductImages,
}

/// Cart Item Record
#[derive(Debug, Clone)]
pub struct CartItemRecord {
    pub uuid: CartItemUuid,
    pub user_uuid: UserUuid,
    pub product: CartItemProduct,
    pub quantity: Quantity,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A user's cart, aggregated at the time it was read.
///
/// `total_price` is in minor units.
#[derive(Debug, Clone, Default)]
pub struct CartRecord {
    pub items: Vec<CartItemRecord>,
    pub total_items: u64,
    pub total_price: u128,
}
