//! Validation errors raised by the trade simulator.
//!
//! The `Display` of each category is the message shown to the user; the
//! wrapped problem says precisely what was wrong and ends up in the log.

use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TradeError {
    #[error("Please enter valid stock symbol and quantity")]
    InvalidTradeInput(InputProblem),

    #[error("Invalid sell operation")]
    InvalidSellOperation(SellProblem),
}

impl TradeError {
    pub fn reason(&self) -> String {
        match self {
            TradeError::InvalidTradeInput(problem) => problem.to_string(),
            TradeError::InvalidSellOperation(problem) => problem.to_string(),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InputProblem {
    #[error("symbol is empty")]
    EmptySymbol,

    #[error("quantity '{0}' is not a positive whole number")]
    InvalidQuantity(String),

    #[error("cannot add {requested} shares to {held} shares of {symbol}")]
    PositionTooLarge {
        symbol: String,
        held: u32,
        requested: u32,
    },
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SellProblem {
    #[error("no holding of {0}")]
    NotHeld(String),

    #[error("quantity '{0}' is not a positive whole number")]
    InvalidQuantity(String),

    #[error("cannot sell {requested} shares of {symbol}, only {held} held")]
    InsufficientQuantity {
        symbol: String,
        held: u32,
        requested: u32,
    },
}
