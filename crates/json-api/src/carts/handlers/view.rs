//! View Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
    observability::{CartOperation, observe_cart_operation},
    state::State,
};

/// View Cart Handler
///
/// Returns the user's items with the total quantity and total price.
#[endpoint(
    tags("cart"),
    summary = "View Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart contents"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.view",
    skip(depot),
    fields(user_uuid = tracing::field::Empty, items = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));

    let result = state.app.carts.get_cart(user).await;

    observe_cart_operation(CartOperation::ViewCart, &result);

    let cart = result.map_err(into_status_error)?;

    span.record("items", cart.items.len());

    Ok(Json(cart.into()))
}
