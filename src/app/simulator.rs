//! The trade simulator: pending input, portfolio and totals behind two
//! operations, Buy and Sell.
//!
//! Both operations are synchronous. On success they mutate the portfolio,
//! notify, and clear the pending input. On failure they only notify.

use log::{debug, info};
use rust_decimal::Decimal;

use crate::{
    app::{
        Portfolio,
        notifications::Notifier,
        price::PriceSource,
        utils::{normalize_symbol, parse_quantity},
    },
    error::{InputProblem, SellProblem, TradeError},
    models::{
        Holding, InputField, LotPolicy, NotificationKind, Totals, Trade, TradeInput, TradeSide,
    },
};

pub struct TradeSimulator<P: PriceSource> {
    input: TradeInput,
    portfolio: Portfolio,
    prices: P,
}

impl<P: PriceSource> TradeSimulator<P> {
    pub fn new(starting_balance: Decimal, policy: LotPolicy, prices: P) -> Self {
        Self {
            input: TradeInput::default(),
            portfolio: Portfolio::new(starting_balance, policy),
            prices,
        }
    }

    #[cfg(test)]
    pub(crate) fn price_source(&self) -> &P {
        &self.prices
    }

    pub fn input(&self) -> &TradeInput {
        &self.input
    }

    pub fn input_field_mut(&mut self, field: InputField) -> &mut String {
        self.input.field_mut(field)
    }

    pub fn set_symbol(&mut self, symbol: &str) {
        self.input.set_symbol(symbol);
    }

    pub fn set_quantity(&mut self, quantity: &str) {
        self.input.set_quantity(quantity);
    }

    pub fn holdings(&self) -> &Vec<Holding> {
        self.portfolio.holdings()
    }

    pub fn totals(&self) -> &Totals {
        self.portfolio.totals()
    }

    pub fn profit_loss(&self) -> Decimal {
        self.portfolio.totals().profit_loss()
    }

    pub fn buy(&mut self, notifier: &mut impl Notifier) -> Result<Trade, TradeError> {
        match self.try_buy() {
            Ok(trade) => {
                info!(
                    "bought {} {} at {} (investment {}, value {})",
                    trade.quantity(),
                    trade.symbol(),
                    trade.price_per_share(),
                    self.totals().total_investment(),
                    self.totals().current_value()
                );
                notifier.notify(
                    NotificationKind::Success,
                    format!(
                        "✅ Bought {} shares of {} at ${} each",
                        trade.quantity(),
                        trade.symbol(),
                        trade.price_per_share()
                    ),
                );
                self.input.clear();
                Ok(trade)
            }
            Err(err) => Err(self.reject(err, notifier)),
        }
    }

    pub fn sell(&mut self, notifier: &mut impl Notifier) -> Result<Trade, TradeError> {
        match self.try_sell() {
            Ok(trade) => {
                info!(
                    "sold {} {} at {} against cost basis {} (value {})",
                    trade.quantity(),
                    trade.symbol(),
                    trade.price_per_share(),
                    trade.cost_basis_per_share(),
                    self.totals().current_value()
                );
                notifier.notify(
                    NotificationKind::Warning,
                    format!(
                        "⚡ Sold {} shares of {} at ${} each",
                        trade.quantity(),
                        trade.symbol(),
                        trade.price_per_share()
                    ),
                );
                self.input.clear();
                Ok(trade)
            }
            Err(err) => Err(self.reject(err, notifier)),
        }
    }

    fn try_buy(&mut self) -> Result<Trade, TradeError> {
        if self.input.symbol().is_empty() {
            return Err(TradeError::InvalidTradeInput(InputProblem::EmptySymbol));
        }
        let symbol = normalize_symbol(self.input.symbol());

        let quantity = parse_quantity(self.input.quantity()).ok_or_else(|| {
            TradeError::InvalidTradeInput(InputProblem::InvalidQuantity(
                self.input.quantity().to_string(),
            ))
        })?;

        self.portfolio
            .check_buy(&symbol, quantity)
            .map_err(TradeError::InvalidTradeInput)?;

        let price_per_share = self.prices.next_price();
        self.portfolio
            .record_buy(&symbol, quantity, price_per_share)
            .map_err(TradeError::InvalidTradeInput)?;

        Ok(Trade::new(
            TradeSide::Buy,
            symbol,
            quantity,
            price_per_share,
            price_per_share,
        ))
    }

    fn try_sell(&mut self) -> Result<Trade, TradeError> {
        let symbol = normalize_symbol(self.input.symbol());
        if self.portfolio.find(&symbol).is_none() {
            return Err(TradeError::InvalidSellOperation(SellProblem::NotHeld(
                symbol,
            )));
        }

        let quantity = parse_quantity(self.input.quantity()).ok_or_else(|| {
            TradeError::InvalidSellOperation(SellProblem::InvalidQuantity(
                self.input.quantity().to_string(),
            ))
        })?;

        let released = self
            .portfolio
            .record_sell(&symbol, quantity)
            .map_err(TradeError::InvalidSellOperation)?;
        let sell_price_per_share = self.prices.next_price();

        Ok(Trade::new(
            TradeSide::Sell,
            symbol,
            quantity,
            sell_price_per_share,
            released.per_share,
        ))
    }

    fn reject(&self, err: TradeError, notifier: &mut impl Notifier) -> TradeError {
        debug!("rejected trade: {}", err.reason());
        notifier.notify(NotificationKind::Error, format!("⚠️ {}", err));
        err
    }
}
