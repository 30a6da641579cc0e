//! ユーザー通知（トースト）
//!
//! コアから表示側への一方向の通知。応答は待たない。

/// 通知の種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    CodeCopied,
    DownloadStarted,
    ProjectSaved { title: String },
    ProjectRemoved { title: String },
    AccessRequested { name: String },
}

impl Notification {
    pub fn title(&self) -> &'static str {
        match self {
            Notification::CodeCopied => "Code copied",
            Notification::DownloadStarted => "Download started",
            Notification::ProjectSaved { .. } => "Project saved",
            Notification::ProjectRemoved { .. } => "Project removed",
            Notification::AccessRequested { .. } => "Request received",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notification::CodeCopied => "The code has been copied to your clipboard".to_string(),
            Notification::DownloadStarted => {
                "Your template code is being prepared for download".to_string()
            }
            Notification::ProjectSaved { title } => {
                format!("{} has been added to your projects.", title)
            }
            Notification::ProjectRemoved { title } => {
                format!("{} has been removed from your projects.", title)
            }
            Notification::AccessRequested { name } => {
                format!("Thanks {}, we'll be in touch shortly.", name)
            }
        }
    }
}

/// 通知の送り先
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// 受け取った通知を順に溜める
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_description() {
        let n = Notification::ProjectSaved { title: "Analytics Dashboard".into() };
        assert_eq!(n.title(), "Project saved");
        assert_eq!(n.description(), "Analytics Dashboard has been added to your projects.");
    }

    #[test]
    fn test_removed_description() {
        let n = Notification::ProjectRemoved { title: "Analytics Dashboard".into() };
        assert_eq!(n.title(), "Project removed");
        assert_eq!(n.description(), "Analytics Dashboard has been removed from your projects.");
    }

    #[test]
    fn test_vec_notifier_collects() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.notify(Notification::CodeCopied);
        sink.notify(Notification::DownloadStarted);
        assert_eq!(sink, vec![Notification::CodeCopied, Notification::DownloadStarted]);
    }
}
