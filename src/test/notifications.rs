#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};

    use crate::{
        app::{NotificationCenter, Notifier},
        models::NotificationKind,
    };

    #[test]
    fn notifications_stack_newest_first() {
        let mut center = NotificationCenter::new(Duration::milliseconds(3000));
        let now = Local::now();

        center.notify_at(NotificationKind::Success, String::from("first"), now);
        center.notify_at(
            NotificationKind::Error,
            String::from("second"),
            now + Duration::milliseconds(500),
        );

        let messages: Vec<&str> = center
            .active()
            .map(|notification| notification.message().as_str())
            .collect();
        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn notifications_expire_independently() {
        let mut center = NotificationCenter::new(Duration::milliseconds(3000));
        let now = Local::now();

        center.notify_at(NotificationKind::Success, String::from("first"), now);
        center.notify_at(
            NotificationKind::Warning,
            String::from("second"),
            now + Duration::milliseconds(1000),
        );

        center.prune(now + Duration::milliseconds(2999));
        assert_eq!(center.active().count(), 2);

        center.prune(now + Duration::milliseconds(3000));
        let remaining: Vec<NotificationKind> = center
            .active()
            .map(|notification| *notification.kind())
            .collect();
        assert_eq!(remaining, vec![NotificationKind::Warning]);

        center.prune(now + Duration::milliseconds(4000));
        assert!(center.is_empty());
    }

    #[test]
    fn notify_stamps_current_time() {
        let mut center = NotificationCenter::new(Duration::milliseconds(3000));
        let before = Local::now();

        center.notify(NotificationKind::Warning, String::from("sold"));

        let notification = center.active().next().unwrap();
        assert!(*notification.created_at() >= before);
        assert!(!notification.is_expired(before, center.timeout()));
    }
}
