//! Cart Quantities
//!
//! A quantity is a positive whole number small enough to be stored in an
//! `INTEGER` column. Anything else is rejected before it reaches the store.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU32,
    str::FromStr,
};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("quantity must be a positive whole number")]
    NotPositive,

    #[error("quantity must not exceed {max}")]
    TooLarge { max: u32 },

    #[error("quantity is not a whole number")]
    NotANumber,
}

/// Quantity of a single product held in a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Largest storable quantity.
    pub const MAX: u32 = i32::MAX.unsigned_abs();

    /// Build a quantity from any signed integer.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is zero, negative or above [`Quantity::MAX`].
    pub fn new(value: i64) -> Result<Self, QuantityError> {
        if value <= 0 {
            return Err(QuantityError::NotPositive);
        }

        match u32::try_from(value) {
            Ok(value) if value <= Self::MAX => NonZeroU32::new(value)
                .map(Self)
                .ok_or(QuantityError::NotPositive),
            _ => Err(QuantityError::TooLarge { max: Self::MAX }),
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The quantity as stored in the `cart_items.quantity` column.
    #[must_use]
    pub fn to_i32(self) -> i32 {
        i32::try_from(self.get()).unwrap_or(i32::MAX)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    /// Parses a decimal integer, tolerating surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();

        match trimmed.parse::<i64>() {
            Ok(parsed) => Self::new(parsed),
            // Overlong digit strings still deserve the range error, not a parse error.
            Err(_) if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) => {
                Err(QuantityError::TooLarge { max: Self::MAX })
            }
            Err(_) => Err(QuantityError::NotANumber),
        }
    }
}

impl From<Quantity> for u64 {
    fn from(value: Quantity) -> Self {
        u64::from(value.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_values() {
        assert_eq!(Quantity::new(1).map(Quantity::get), Ok(1));
        assert_eq!(Quantity::new(42).map(Quantity::get), Ok(42));
        assert_eq!(
            Quantity::new(i64::from(i32::MAX)).map(Quantity::get),
            Ok(Quantity::MAX)
        );
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert_eq!(Quantity::new(0), Err(QuantityError::NotPositive));
        assert_eq!(Quantity::new(-3), Err(QuantityError::NotPositive));
        assert_eq!(Quantity::new(i64::MIN), Err(QuantityError::NotPositive));
    }

    #[test]
    fn rejects_values_beyond_column_range() {
        assert_eq!(
            Quantity::new(i64::from(i32::MAX) + 1),
            Err(QuantityError::TooLarge { max: Quantity::MAX })
        );
        assert_eq!(
            Quantity::new(i64::MAX),
            Err(QuantityError::TooLarge { max: Quantity::MAX })
        );
    }

    #[test]
    fn parses_integer_strings() {
        assert_eq!("3".parse::<Quantity>().map(Quantity::get), Ok(3));
        assert_eq!(" 12 ".parse::<Quantity>().map(Quantity::get), Ok(12));
    }

    #[test]
    fn rejects_non_integer_strings() {
        assert_eq!("abc".parse::<Quantity>(), Err(QuantityError::NotANumber));
        assert_eq!("1.5".parse::<Quantity>(), Err(QuantityError::NotANumber));
        assert_eq!("".parse::<Quantity>(), Err(QuantityError::NotANumber));
        assert_eq!("-2".parse::<Quantity>(), Err(QuantityError::NotPositive));
        assert_eq!(
            "99999999999999999999999".parse::<Quantity>(),
            Err(QuantityError::TooLarge { max: Quantity::MAX })
        );
    }

    #[test]
    fn defaults_to_one() {
        assert_eq!(Quantity::default(), Quantity::ONE);
        assert_eq!(Quantity::ONE.to_i32(), 1);
    }
}
