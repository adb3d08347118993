use rand::{Rng, SeedableRng, rngs::StdRng};
use rust_decimal::Decimal;

pub trait PriceSource {
    fn next_price(&mut self) -> Decimal;
}

/// Whole-dollar prices drawn uniformly from `min..=max`.
pub struct RandomPriceSource {
    rng: StdRng,
    min: u32,
    max: u32,
}

impl RandomPriceSource {
    pub fn new(min: u32, max: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, min, max }
    }
}

impl PriceSource for RandomPriceSource {
    fn next_price(&mut self) -> Decimal {
        Decimal::from(self.rng.gen_range(self.min..=self.max))
    }
}
