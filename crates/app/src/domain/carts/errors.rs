//! Carts service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

use crate::domain::carts::quantity::QuantityError;

/// `numeric_value_out_of_range`, raised when a merged quantity overflows `INTEGER`.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

const PRODUCT_FOREIGN_KEY: &str = "cart_items_product_uuid_fkey";
const QUANTITY_CHECK: &str = "cart_items_quantity_check";

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("product not found")]
    ProductNotFound,

    #[error("cart item not found")]
    ItemNotFound,

    #[error("invalid quantity")]
    InvalidQuantity(#[source] Option<QuantityError>),

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("cart totals overflowed")]
    TotalsOverflow,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<QuantityError> for CartsServiceError {
    fn from(error: QuantityError) -> Self {
        Self::InvalidQuantity(Some(error))
    }
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::ItemNotFound;
        }

        let Some(db_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        if db_error.code().as_deref() == Some(NUMERIC_VALUE_OUT_OF_RANGE) {
            return Self::InvalidQuantity(None);
        }

        match db_error.kind() {
            ErrorKind::ForeignKeyViolation if db_error.constraint() == Some(PRODUCT_FOREIGN_KEY) => {
                Self::ProductNotFound
            }
            ErrorKind::ForeignKeyViolation => Self::InvalidReference,
            ErrorKind::CheckViolation if db_error.constraint() == Some(QUANTITY_CHECK) => {
                Self::InvalidQuantity(None)
            }
            ErrorKind::CheckViolation => Self::InvalidData,
            ErrorKind::NotNullViolation => Self::MissingRequiredData,
            ErrorKind::UniqueViolation | ErrorKind::Other | _ => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_item_not_found() {
        assert!(matches!(
            CartsServiceError::from(Error::RowNotFound),
            CartsServiceError::ItemNotFound
        ));
    }

    #[test]
    fn quantity_errors_map_to_invalid_quantity() {
        assert!(matches!(
            CartsServiceError::from(QuantityError::NotPositive),
            CartsServiceError::InvalidQuantity(Some(QuantityError::NotPositive))
        ));
    }

    #[test]
    fn pool_errors_are_storage_errors() {
        assert!(matches!(
            CartsServiceError::from(Error::PoolTimedOut),
            CartsServiceError::Sql(_)
        ));
    }
}
