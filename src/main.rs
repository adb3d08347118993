use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use stock_dashboard_tui::{
    app::{App, NotificationCenter, RandomPriceSource, TradeSimulator},
    config::Config,
    logging,
};

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::parse();
    config.validate().with_context(|| "Invalid configuration")?;
    logging::init(&config)?;
    debug!("starting with {:?}", config);

    let prices = RandomPriceSource::new(config.min_price, config.max_price, config.seed);
    let simulator = TradeSimulator::new(config.starting_balance, config.lot_policy, prices);
    let notifications = NotificationCenter::new(config.notification_timeout());

    let mut app = App::new(simulator, notifications, config.portfolio_title());
    app.run()?;

    Ok(())
}
