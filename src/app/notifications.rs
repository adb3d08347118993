use chrono::{DateTime, Duration, Local};

use crate::models::{Notification, NotificationKind};

pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: String);
}

/// Stack of toasts shown in the top-right corner. Each one expires on its
/// own after `timeout`, independently of the others.
#[derive(Clone, Debug)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    timeout: Duration,
}

impl NotificationCenter {
    pub fn new(timeout: Duration) -> Self {
        Self {
            notifications: Vec::new(),
            timeout,
        }
    }

    #[cfg(test)]
    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn notify_at(&mut self, kind: NotificationKind, message: String, now: DateTime<Local>) {
        self.notifications.push(Notification::new(kind, message, now));
    }

    pub fn prune(&mut self, now: DateTime<Local>) {
        let timeout = self.timeout;
        self.notifications
            .retain(|notification| !notification.is_expired(now, timeout));
    }

    /// Newest first, the order they are stacked on screen.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().rev()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, kind: NotificationKind, message: String) {
        self.notify_at(kind, message, Local::now());
    }
}
