use derive_getters::Getters;
use rust_decimal::Decimal;

#[derive(Clone, Copy, Debug, Eq, Getters, PartialEq)]
pub struct Totals {
    total_investment: Decimal,
    current_value: Decimal,
}

impl Totals {
    pub fn new(starting_balance: Decimal) -> Self {
        Self {
            total_investment: starting_balance,
            current_value: starting_balance,
        }
    }

    pub fn profit_loss(&self) -> Decimal {
        self.current_value - self.total_investment
    }

    pub fn record_purchase(&mut self, cost: Decimal) {
        self.total_investment += cost;
        self.current_value += cost;
    }

    /// Sales only move the current value; investment is never given back.
    pub fn record_sale(&mut self, cost_basis: Decimal) {
        self.current_value -= cost_basis;
    }
}
