use theme_gallery_common::{Notification, Notifier};

/// 通知を標準出力に表示
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(?notification, "通知");
        println!("✔ {}: {}", notification.title(), notification.description());
    }
}
