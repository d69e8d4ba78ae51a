//! Cart Handlers

pub(crate) mod clear;
pub(crate) mod create;
pub(crate) mod update;
pub(crate) mod view;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use storefront_app::domain::{
        carts::{
            Quantity,
            records::{CartItemProduct, CartItemRecord, CartItemUuid},
        },
        products::records::{ProductImages, ProductUuid},
    };

    use crate::test_helpers::TEST_USER_UUID;

    pub(super) fn make_item(
        uuid: CartItemUuid,
        product: ProductUuid,
        price: u64,
        quantity: u32,
    ) -> CartItemRecord {
        CartItemRecord {
            uuid,
            user_uuid: TEST_USER_UUID,
            product: CartItemProduct {
                uuid: product,
                name: "Green Tea".to_string(),
                slug: "green-tea".to_string(),
                category_name: "Drinks".to_string(),
                subcategory_name: "Tea".to_string(),
                price,
                images: ProductImages {
                    small: "products/small/green-tea.png".to_string(),
                    medium: "products/medium/green-tea.png".to_string(),
                    big: "products/big/green-tea.png".to_string(),
                },
            },
            quantity: Quantity::new(i64::from(quantity)).expect("valid test quantity"),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
