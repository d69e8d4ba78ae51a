//! Cart request bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::carts::{Quantity, QuantityError};

/// A quantity as clients send it: a JSON integer, or a string holding one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum QuantityInput {
    Integer(i64),
    Text(String),
    Flag(bool),
}

impl QuantityInput {
    /// `0`, `""` and `false` mean "no quantity given".
    fn is_blank(&self) -> bool {
        match self {
            Self::Integer(value) => *value == 0,
            Self::Text(value) => value.trim().is_empty(),
            Self::Flag(value) => !value,
        }
    }

    fn parse(&self) -> Result<Quantity, QuantityError> {
        match self {
            Self::Integer(value) => Quantity::new(*value),
            Self::Text(value) => value.parse(),
            Self::Flag(_) => Err(QuantityError::NotANumber),
        }
    }
}

/// Quantity to add. Omitted or `null` adds one.
pub(crate) fn quantity_to_add(input: Option<&QuantityInput>) -> Result<Quantity, QuantityError> {
    input.map_or(Ok(Quantity::ONE), QuantityInput::parse)
}

/// Quantity to set. Omitted, `null` or blank leaves the line unchanged.
pub(crate) fn quantity_to_set(
    input: Option<&QuantityInput>,
) -> Result<Option<Quantity>, QuantityError> {
    match input {
        Some(input) if !input.is_blank() => input.parse().map(Some),
        _ => Ok(None),
    }
}
