use rust_decimal::Decimal;

pub fn cost(price_per_share: Decimal, quantity: u32) -> Decimal {
    price_per_share * Decimal::from(quantity)
}

/// Share of `total_cost` carried by `sold` out of `held` shares. Selling the
/// whole position returns `total_cost` itself, so no remainder is left behind.
pub fn proportional_cost(total_cost: Decimal, held: u32, sold: u32) -> Decimal {
    if held == 0 {
        return Decimal::ZERO;
    }
    if sold >= held {
        return total_cost;
    }
    total_cost * Decimal::from(sold) / Decimal::from(held)
}
