pub mod holding;
pub mod lot_policy;
pub mod notification;
pub mod totals;
pub mod trade;
pub mod trade_input;

pub use holding::Holding;
pub use lot_policy::LotPolicy;
pub use notification::{Notification, NotificationKind};
pub use totals::Totals;
pub use trade::{Trade, TradeSide};
pub use trade_input::{InputField, TradeInput};
