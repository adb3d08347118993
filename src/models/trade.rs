use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// An executed Buy or Sell.
///
/// For sells, `price_per_share` is the freshly drawn sell price shown to the
/// user while `cost_basis_per_share` is what the current value was reduced by.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Trade {
    side: TradeSide,
    symbol: String,
    quantity: u32,
    price_per_share: Decimal,
    cost_basis_per_share: Decimal,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TradeSide {
    Buy,
    Sell,
}
