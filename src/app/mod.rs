pub mod app;
pub mod calc;
pub mod notifications;
pub mod portfolio;
pub mod price;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use app::App;
pub use notifications::{NotificationCenter, Notifier};
pub use portfolio::Portfolio;
pub use price::{PriceSource, RandomPriceSource};
pub use simulator::TradeSimulator;
