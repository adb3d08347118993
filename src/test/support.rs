#![cfg(test)]

use std::collections::VecDeque;

use rust_decimal::Decimal;

use crate::{
    app::{Notifier, PriceSource, TradeSimulator},
    models::{LotPolicy, NotificationKind},
};

/// Replays a fixed list of prices, in order.
pub struct ScriptedPrices {
    prices: VecDeque<Decimal>,
}

impl ScriptedPrices {
    pub fn new(prices: &[Decimal]) -> Self {
        Self {
            prices: prices.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.prices.len()
    }
}

impl PriceSource for ScriptedPrices {
    fn next_price(&mut self) -> Decimal {
        self.prices.pop_front().expect("price script exhausted")
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub sent: Vec<(NotificationKind, String)>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<&(NotificationKind, String)> {
        self.sent.last()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, kind: NotificationKind, message: String) {
        self.sent.push((kind, message));
    }
}

pub fn simulator(policy: LotPolicy, prices: &[Decimal]) -> TradeSimulator<ScriptedPrices> {
    TradeSimulator::new(Decimal::from(10000), policy, ScriptedPrices::new(prices))
}
