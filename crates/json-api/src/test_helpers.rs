//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use storefront_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::MockCartsService, categories::MockCategoriesService,
        products::MockProductsService, users::MockUsersService, users::records::UserUuid,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();
    auth.expect_issue_api_token().never();
    auth.expect_revoke_api_token().never();

    auth
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_add_item().never();
    carts.expect_update_item().never();
    carts.expect_get_cart().never();
    carts.expect_clear_cart().never();

    carts
}

/// Context whose catalog and user services must never be reached from the HTTP layer.
pub(crate) fn app_context(carts: MockCartsService, auth: MockAuthService) -> AppContext {
    AppContext {
        carts: Arc::new(carts),
        categories: Arc::new(MockCategoriesService::new()),
        products: Arc::new(MockProductsService::new()),
        users: Arc::new(MockUsersService::new()),
        auth: Arc::new(auth),
    }
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    State::from_app_context(app_context(carts, strict_auth_mock()))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    State::from_app_context(app_context(strict_carts_mock(), auth))
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .hoop(inject_user)
            .push(route),
    )
}
