use rust_decimal::Decimal;

use crate::{
    app::calc::cost,
    error::{InputProblem, SellProblem},
    models::{Holding, LotPolicy, Totals},
};

#[derive(Clone, Debug)]
pub struct Portfolio {
    holdings: Vec<Holding>,
    totals: Totals,
    policy: LotPolicy,
}

/// Cost released by a sale: per share as shown, and in total as booked.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReleasedCost {
    pub per_share: Decimal,
    pub total: Decimal,
}

impl Portfolio {
    pub fn new(starting_balance: Decimal, policy: LotPolicy) -> Self {
        Self {
            holdings: Vec::new(),
            totals: Totals::new(starting_balance),
            policy,
        }
    }

    pub fn holdings(&self) -> &Vec<Holding> {
        &self.holdings
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// First holding of `symbol`, in insertion order.
    pub fn find(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.iter().find(|holding| holding.symbol() == symbol)
    }

    fn merge_target(&self, symbol: &str) -> Option<usize> {
        match self.policy {
            LotPolicy::Lots => None,
            LotPolicy::Merge => self
                .holdings
                .iter()
                .position(|holding| holding.symbol() == symbol),
        }
    }

    /// Checks that a purchase can be recorded, before any price is drawn.
    pub fn check_buy(&self, symbol: &str, quantity: u32) -> Result<(), InputProblem> {
        match self.merge_target(symbol) {
            Some(index) => {
                let held = *self.holdings[index].quantity();
                held.checked_add(quantity)
                    .map(|_| ())
                    .ok_or_else(|| InputProblem::PositionTooLarge {
                        symbol: symbol.to_string(),
                        held,
                        requested: quantity,
                    })
            }
            None => Ok(()),
        }
    }

    /// Records a purchase and returns its cost.
    pub fn record_buy(
        &mut self,
        symbol: &str,
        quantity: u32,
        price_per_share: Decimal,
    ) -> Result<Decimal, InputProblem> {
        self.check_buy(symbol, quantity)?;
        let purchase_cost = cost(price_per_share, quantity);

        match self.merge_target(symbol) {
            Some(index) => {
                let holding = &mut self.holdings[index];
                let held = *holding.quantity();
                holding
                    .add(quantity, purchase_cost)
                    .ok_or_else(|| InputProblem::PositionTooLarge {
                        symbol: symbol.to_string(),
                        held,
                        requested: quantity,
                    })?;
            }
            None => self
                .holdings
                .push(Holding::new(symbol.to_string(), quantity, price_per_share)),
        }

        self.totals.record_purchase(purchase_cost);
        Ok(purchase_cost)
    }

    /// Draws `quantity` shares down from the first holding of `symbol`.
    pub fn record_sell(&mut self, symbol: &str, quantity: u32) -> Result<ReleasedCost, SellProblem> {
        let index = self
            .holdings
            .iter()
            .position(|holding| holding.symbol() == symbol)
            .ok_or_else(|| SellProblem::NotHeld(symbol.to_string()))?;

        let holding = &mut self.holdings[index];
        let held = *holding.quantity();
        if quantity > held {
            return Err(SellProblem::InsufficientQuantity {
                symbol: symbol.to_string(),
                held,
                requested: quantity,
            });
        }

        let per_share = *holding.price_per_share();
        let total = holding.reduce(quantity);
        if holding.is_closed() {
            self.holdings.remove(index);
        }

        self.totals.record_sale(total);
        Ok(ReleasedCost { per_share, total })
    }
}
