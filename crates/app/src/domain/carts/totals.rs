//! Cart Totals

use crate::domain::carts::quantity::Quantity;

/// Aggregates over a cart's lines. `total_price` is in minor units.
///
/// A single line is at most `u64::MAX * i32::MAX` minor units, so the price
/// sum is held in `u128`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub total_items: u64,
    pub total_price: u128,
}

impl CartTotals {
    /// Sum `(quantity, unit price)` lines. Returns `None` on overflow.
    #[must_use]
    pub fn from_lines<I>(lines: I) -> Option<Self>
    where
        I: IntoIterator<Item = (Quantity, u64)>,
    {
        lines
            .into_iter()
            .try_fold(Self::default(), |totals, (quantity, unit_price)| {
                let quantity = u64::from(quantity);
                let line_price = u128::from(unit_price) * u128::from(quantity);

                Some(Self {
                    total_items: totals.total_items.checked_add(quantity)?,
                    total_price: totals.total_price.checked_add(line_price)?,
                })
            })
    }
}
