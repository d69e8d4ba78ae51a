//! Auth middleware.
//!
//! Resolves the `Authorization: Bearer` token to a user and stores it in the
//! depot. Every cart route sits behind this hoop.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::{error, field};

use storefront_app::auth::AuthServiceError;

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        reject(
            res,
            ctrl,
            StatusError::unauthorized().brief("Missing or invalid Authorization header"),
        );

        return;
    };

    let authenticated = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state.app.auth.authenticate_bearer(token).await,
        Err(status) => {
            reject(res, ctrl, status);

            return;
        }
    };

    match authenticated {
        Ok(user_uuid) => {
            tracing::Span::current().record("user_uuid", field::display(user_uuid));

            depot.insert_user_uuid(user_uuid);

            ctrl.call_next(req, depot, res).await;
        }
        Err(auth_error) => reject(res, ctrl, rejection(auth_error)),
    }
}

fn reject(res: &mut Response, ctrl: &mut FlowCtrl, status: StatusError) {
    res.render(status);
    ctrl.skip_rest();
}

/// Unknown, revoked or orphaned tokens are the client's problem; the rest are ours.
fn rejection(auth_error: AuthServiceError) -> StatusError {
    match auth_error {
        AuthServiceError::NotFound | AuthServiceError::UserNotFound => {
            StatusError::unauthorized().brief("Invalid API token")
        }
        AuthServiceError::Sql(source) => {
            error!("failed to validate api token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Token(source) => {
            error!("failed to process api token: {source}");

            StatusError::internal_server_error()
        }
    }
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
