use derive_getters::Getters;
use rust_decimal::Decimal;

use crate::app::calc::{cost, proportional_cost};

/// A held position. `cost` is the exact amount still invested in it;
/// `price_per_share` is the per-share basis shown to the user.
#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct Holding {
    symbol: String,
    quantity: u32,
    price_per_share: Decimal,
    cost: Decimal,
}

impl Holding {
    pub fn new(symbol: String, quantity: u32, price_per_share: Decimal) -> Self {
        Self {
            symbol,
            quantity,
            price_per_share,
            cost: cost(price_per_share, quantity),
        }
    }

    /// Adds shares to the position; `None` when the share count would overflow.
    pub fn add(&mut self, quantity: u32, added_cost: Decimal) -> Option<()> {
        let merged_quantity = self.quantity.checked_add(quantity)?;
        self.quantity = merged_quantity;
        self.cost += added_cost;
        self.price_per_share = self.cost / Decimal::from(merged_quantity);
        Some(())
    }

    /// Removes shares and returns the cost they carried. Closing the position
    /// releases exactly the remaining cost.
    pub fn reduce(&mut self, quantity: u32) -> Decimal {
        let released = proportional_cost(self.cost, self.quantity, quantity);
        self.quantity = self.quantity.saturating_sub(quantity);
        self.cost -= released;
        released
    }

    pub fn is_closed(&self) -> bool {
        self.quantity == 0
    }
}
