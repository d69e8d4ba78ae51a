//! Clear Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, responses::ClearCartResponse},
    extensions::*,
    observability::{CartOperation, observe_cart_operation},
    state::State,
};

/// Clear Cart Handler
///
/// Removes every item from the user's cart. Clearing an empty cart succeeds.
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart cleared"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.clear",
    skip(depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ClearCartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    let result = state.app.carts.clear_cart(user).await;

    observe_cart_operation(CartOperation::ClearCart, &result);

    let deleted = result.map_err(into_status_error)?;

    tracing::info!(deleted, "cleared cart");

    Ok(Json(ClearCartResponse::new(deleted)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::carts::MockCartsService;

    use crate::test_helpers::{TEST_USER_UUID, carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/clear_cart").post(handler))
    }

    #[tokio::test]
    async fn test_clear_reports_deleted_count() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_clear_cart()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|_| Ok(2));

        let mut res = TestClient::post("http://example.com/cart/clear_cart")
            .send(&make_service(carts))
            .await;

        let body: ClearCartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Cart cleared");
        assert_eq!(body.deleted, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_clearing_empty_cart_succeeds() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_clear_cart().once().return_once(|_| Ok(0));

        let res = TestClient::post("http://example.com/cart/clear_cart")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
