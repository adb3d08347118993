mod notifications;
mod support;
mod ui;
mod utils;
