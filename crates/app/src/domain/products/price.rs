//! Prices
//!
//! Amounts are held as integer minor units (hundredths) and only become
//! decimals at the edges: operator input and JSON output.

use std::str::FromStr;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;

const MINOR_UNITS_PER_MAJOR: u128 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price is not a decimal number")]
    NotANumber,

    #[error("price must not be negative")]
    Negative,

    #[error("price has more than two decimal places")]
    TooPrecise,

    #[error("price is too large")]
    TooLarge,
}

/// Parse a decimal amount such as `"10.5"` or `"10.50"` into minor units.
///
/// # Errors
///
/// Returns an error when the amount is malformed, negative, finer than a
/// hundredth or does not fit in `u64` minor units.
pub fn parse_minor_units(amount: &str) -> Result<u64, PriceError> {
    let amount = Decimal::from_str(amount.trim()).or(Err(PriceError::NotANumber))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PriceError::Negative);
    }

    let minor = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(PriceError::TooLarge)?;

    if !minor.fract().is_zero() {
        return Err(PriceError::TooPrecise);
    }

    minor.to_u64().ok_or(PriceError::TooLarge)
}

/// Render minor units as a two-place decimal string, e.g. `2500` as `"25.00"`.
///
/// Accepts cart totals as well as unit prices, which can exceed the range of
/// `Decimal`.
#[must_use]
pub fn format_minor_units(minor: impl Into<u128>) -> String {
    let minor = minor.into();

    format!("{}.{:02}", minor / MINOR_UNITS_PER_MAJOR, minor % MINOR_UNITS_PER_MAJOR)
}
