//! App Router

use salvo::Router;

use crate::{auth, carts};

/// Cart routes, all behind bearer authentication.
///
/// The named actions are pushed before `{item}` so they are not taken for
/// item ids.
pub(crate) fn cart_router() -> Router {
    Router::with_path("cart")
        .hoop(auth::middleware::handler)
        .post(carts::create::handler)
        .push(Router::with_path("view_cart").get(carts::view::handler))
        .push(Router::with_path("clear_cart").post(carts::clear::handler))
        .push(
            Router::with_path("{item}")
                .put(carts::update::handler)
                .patch(carts::update::handler),
        )
}
