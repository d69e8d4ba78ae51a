//! Cart response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{
    carts::records::{CartItemProduct, CartItemRecord, CartRecord},
    products::{price::format_minor_units, records::ProductImages},
};

/// Product Images
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductImagesResponse {
    pub small: String,
    pub medium: String,
    pub big: String,
}

impl From<ProductImages> for ProductImagesResponse {
    fn from(images: ProductImages) -> Self {
        Self {
            small: images.small,
            medium: images.medium,
            big: images.big,
        }
    }
}

/// Cart Item Product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    pub name: String,

    pub slug: String,

    /// Category name
    pub category: String,

    /// Subcategory name
    pub subcategory: String,

    /// Unit price as a decimal with two places, e.g. `"10.00"`
    pub price: String,

    pub images: ProductImagesResponse,
}

impl From<CartItemProduct> for CartItemProductResponse {
    fn from(product: CartItemProduct) -> Self {
        Self {
            id: product.uuid.into(),
            name: product.name,
            slug: product.slug,
            category: product.category_name,
            subcategory: product.subcategory_name,
            price: format_minor_units(product.price),
            images: product.images.into(),
        }
    }
}

/// Cart Item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the cart item
    pub id: Uuid,

    pub product: CartItemProductResponse,

    pub quantity: u32,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(item: CartItemRecord) -> Self {
        Self {
            id: item.uuid.into(),
            product: item.product.into(),
            quantity: item.quantity.get(),
        }
    }
}

/// Cart
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Items in the order they were first added
    pub items: Vec<CartItemResponse>,

    /// Sum of all item quantities
    pub total_items: u64,

    /// Sum of price times quantity, as a decimal with two places
    pub total_price: String,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        Self {
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total_items: cart.total_items,
            total_price: format_minor_units(cart.total_price),
        }
    }
}

/// Cart Cleared
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClearCartResponse {
    pub message: String,

    /// Number of cart items removed
    pub deleted: u64,
}

impl ClearCartResponse {
    pub(crate) fn new(deleted: u64) -> Self {
        Self {
            message: "Cart cleared".to_string(),
            deleted,
        }
    }
}
