//! Add To Cart Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::data::NewCartItem;

use crate::{
    carts::{
        errors::{into_status_error, invalid_quantity},
        requests::{QuantityInput, quantity_to_add},
        responses::CartItemResponse,
    },
    extensions::*,
    observability::{CartOperation, observe_cart_operation},
    state::State,
};

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddToCartRequest {
    /// Product to add
    pub product_id: Uuid,

    /// How many to add; defaults to 1
    #[serde(default)]
    pub quantity: Option<QuantityInput>,
}

/// Add To Cart Handler
///
/// Adds a product to the cart, or increases the quantity of the line already
/// holding it.
#[endpoint(
    tags("cart"),
    summary = "Add To Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.add_item",
    skip(json, depot, res),
    fields(
        user_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let request = json.into_inner();

    let quantity = quantity_to_add(request.quantity.as_ref()).map_err(invalid_quantity)?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("product_uuid", tracing::field::display(request.product_id));
    span.record("quantity", quantity.get());

    let result = state
        .app
        .carts
        .add_item(
            user,
            NewCartItem {
                product_uuid: request.product_id.into(),
                quantity,
            },
        )
        .await;

    observe_cart_operation(CartOperation::AddItem, &result);

    let item = result.map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/cart/{}", item.uuid), true)
        .or_500("failed to set location header")?;

    tracing::info!(
        cart_item_uuid = %item.uuid,
        quantity = item.quantity.get(),
        "added item to cart"
    );

    Ok(Json(item.into()))
}
