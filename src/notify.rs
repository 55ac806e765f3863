use std::fmt;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term";
pub const NO_RESULTS_MESSAGE: &str = "There are no search results. Try again!";
pub const FAILURE_MESSAGE: &str = "Something went wrong, check the log for details.";

/// Styling key for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Danger,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Danger => "danger",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Danger, message)
    }
}

/// Surface that shows transient messages to the user.
///
/// Each call replaces whatever was shown before; there is no queue.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Writes notifications to stderr, one styled line each
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn format(notification: &Notification) -> String {
        let marker = match notification.kind {
            NotificationKind::Info => "i",
            NotificationKind::Warning => "!",
            NotificationKind::Danger => "x",
        };
        format!(
            "[{}] {}: {}",
            marker, notification.kind, notification.message
        )
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        eprintln!("{}", Self::format(notification));
    }
}
