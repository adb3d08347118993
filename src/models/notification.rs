use chrono::{DateTime, Duration, Local};
use derive_getters::Getters;
use derive_new::new;
use strum_macros::Display;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Notification {
    kind: NotificationKind,
    message: String,
    created_at: DateTime<Local>,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Local>, timeout: Duration) -> bool {
        now - self.created_at >= timeout
    }
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}
