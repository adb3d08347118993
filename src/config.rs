use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::LotPolicy;

#[derive(Clone, Debug, Parser)]
#[command(name = "stock-dashboard-tui", version, about = "Simulated stock trading dashboard")]
pub struct Config {
    /// Starting value of both total investment and current value
    #[arg(long, env = "DASHBOARD_STARTING_BALANCE", default_value_t = dec!(10000))]
    pub starting_balance: Decimal,

    /// Lowest simulated price per share
    #[arg(long, env = "DASHBOARD_MIN_PRICE", default_value_t = 1)]
    pub min_price: u32,

    /// Highest simulated price per share
    #[arg(long, env = "DASHBOARD_MAX_PRICE", default_value_t = 100)]
    pub max_price: u32,

    /// How long a notification stays on screen, in milliseconds
    #[arg(long, env = "DASHBOARD_NOTIFICATION_MS", default_value_t = 3000)]
    pub notification_ms: u64,

    /// Seed for reproducible prices
    #[arg(long, env = "DASHBOARD_SEED")]
    pub seed: Option<u64>,

    #[arg(long, env = "DASHBOARD_LOT_POLICY", value_enum, default_value_t = LotPolicy::Lots)]
    pub lot_policy: LotPolicy,

    /// Name shown in the portfolio title
    #[arg(long, env = "DASHBOARD_OWNER")]
    pub owner: Option<String>,

    /// Write logs here; nothing is logged without it
    #[arg(long, env = "DASHBOARD_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.starting_balance < Decimal::ZERO {
            bail!(
                "Starting balance must not be negative, got {}",
                self.starting_balance
            );
        }
        if self.min_price == 0 {
            bail!("Minimum price must be at least 1");
        }
        if self.min_price > self.max_price {
            bail!(
                "Minimum price {} is above maximum price {}",
                self.min_price,
                self.max_price
            );
        }
        if self.notification_ms == 0 {
            bail!("Notification timeout must be positive");
        }
        Ok(())
    }

    pub fn notification_timeout(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(i64::try_from(self.notification_ms).unwrap_or(i64::MAX))
    }

    pub fn portfolio_title(&self) -> String {
        match self.owner.as_deref().map(str::trim) {
            Some(owner) if !owner.is_empty() => format!("{}'s Portfolio", owner),
            _ => String::from("Portfolio"),
        }
    }
}
