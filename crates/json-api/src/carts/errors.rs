//! Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::{CartsServiceError, QuantityError};

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::ItemNotFound => StatusError::not_found().brief("Cart item not found"),
        CartsServiceError::InvalidQuantity(Some(source)) => invalid_quantity(source),
        CartsServiceError::InvalidQuantity(None) => {
            StatusError::bad_request().brief("Quantity is out of range")
        }
        CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart payload")
        }
        CartsServiceError::TotalsOverflow => {
            error!("cart totals overflowed");

            StatusError::internal_server_error()
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn invalid_quantity(error: QuantityError) -> StatusError {
    StatusError::bad_request().brief(capitalize(&error.to_string()))
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();

    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn not_found_kinds_keep_distinct_messages() {
        let product = into_status_error(CartsServiceError::ProductNotFound);
        let item = into_status_error(CartsServiceError::ItemNotFound);

        assert_eq!(product.code, StatusCode::NOT_FOUND);
        assert_eq!(item.code, StatusCode::NOT_FOUND);
        assert_eq!(product.brief, "Product not found");
        assert_eq!(item.brief, "Cart item not found");
    }

    #[test]
    fn invalid_quantity_is_a_bad_request() {
        let error = into_status_error(CartsServiceError::InvalidQuantity(Some(
            QuantityError::NotPositive,
        )));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "Quantity must be a positive whole number");
    }

    #[test]
    fn storage_failures_are_internal_errors() {
        let error = into_status_error(CartsServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn totals_overflow_is_not_blamed_on_the_request() {
        let error = into_status_error(CartsServiceError::TotalsOverflow);

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
