//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::data::CartItemUpdate;

use crate::{
    carts::{
        errors::{into_status_error, invalid_quantity},
        requests::{QuantityInput, quantity_to_set},
        responses::CartItemResponse,
    },
    extensions::*,
    observability::{CartOperation, observe_cart_operation},
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New quantity; omitted, `null`, `0`, `""` or `false` keeps the current one
    #[serde(default)]
    pub quantity: Option<QuantityInput>,
}

/// Update Cart Item Handler
///
/// Replaces the quantity of one of the user's cart items.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.update_item",
    skip(item, json, depot),
    fields(
        user_uuid = tracing::field::Empty,
        cart_item_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let item = item.into_inner();
    let request = json.into_inner();

    let quantity = quantity_to_set(request.quantity.as_ref()).map_err(invalid_quantity)?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("cart_item_uuid", tracing::field::display(item));

    if let Some(quantity) = quantity {
        span.record("quantity", quantity.get());
    }

    let result = state
        .app
        .carts
        .update_item(user, item.into(), CartItemUpdate { quantity })
        .await;

    observe_cart_operation(CartOperation::UpdateItem, &result);

    let updated = result.map_err(into_status_error)?;

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{
        carts::{CartsServiceError, MockCartsService, Quantity, records::CartItemUuid},
        products::records::ProductUuid,
    };

    use crate::{
        carts::handlers::tests::make_item,
        test_helpers::{TEST_USER_UUID, carts_service},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("cart/{item}").put(handler).patch(handler),
        )
    }

    #[tokio::test]
    async fn test_update_replaces_quantity() -> TestResult {
        let item = CartItemUuid::new();
        let product = ProductUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .withf(move |user, u, update| {
                *user == TEST_USER_UUID
                    && *u == item
                    && update.quantity.map(Quantity::get) == Some(5)
            })
            .return_once(move |_, _, _| Ok(make_item(item, product, 10_00, 5)));

        let mut res = TestClient::put(format!("http://example.com/cart/{item}"))
            .json(&json!({ "quantity": 5 }))
            .send(&make_service(carts))
            .await;

        let body: CartItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.quantity, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_patch_with_blank_quantity_leaves_item_unchanged() -> TestResult {
        for body in [json!({}), json!({ "quantity": 0 }), json!({ "quantity": "" })] {
            let item = CartItemUuid::new();
            let product = ProductUuid::new();

            let mut carts = MockCartsService::new();

            carts
                .expect_update_item()
                .once()
                .withf(move |_, u, update| *u == item && *update == CartItemUpdate::default())
                .return_once(move |_, _, _| Ok(make_item(item, product, 10_00, 3)));

            let res = TestClient::patch(format!("http://example.com/cart/{item}"))
                .json(&body)
                .send(&make_service(carts))
                .await;

            assert_eq!(
                res.status_code,
                Some(StatusCode::OK),
                "body {body} should be a no-op update"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_item_returns_404() -> TestResult {
        let item = CartItemUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::ItemNotFound));

        let mut res = TestClient::put(format!("http://example.com/cart/{item}"))
            .json(&json!({ "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(
            res.take_string().await?.contains("Cart item not found"),
            "expected the cart item message"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_negative_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_update_item().never();

        let res = TestClient::put(format!("http://example.com/cart/{}", CartItemUuid::new()))
            .json(&json!({ "quantity": -3 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_invalid_item_id_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_update_item().never();

        let res = TestClient::put("http://example.com/cart/123")
            .json(&json!({ "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
