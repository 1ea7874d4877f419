//! User-facing notifications

use colored::Colorize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Presents short messages to the user. Implementations must not block.
pub trait Notifier {
    fn notify(&self, kind: NotificationKind, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, kind: NotificationKind, message: &str) {
        (**self).notify(kind, message)
    }
}

/// Prints notifications to stderr so stdout stays clean for results.
pub struct ConsoleNotifier {
    use_colors: bool,
}

impl ConsoleNotifier {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn render(&self, kind: NotificationKind, message: &str) -> String {
        let icon = match kind {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✖",
        };
        if !self.use_colors {
            return format!("{} {}", icon, message);
        }
        match kind {
            NotificationKind::Success => format!("{} {}", icon.green().bold(), message.green()),
            NotificationKind::Error => format!("{} {}", icon.red().bold(), message.red()),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        eprintln!("{}", self.render(kind, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rendering() {
        let notifier = ConsoleNotifier::new(false);
        assert_eq!(
            notifier.render(NotificationKind::Success, "Resume uploaded successfully"),
            "✔ Resume uploaded successfully"
        );
        assert_eq!(
            notifier.render(NotificationKind::Error, "Please upload a PDF file"),
            "✖ Please upload a PDF file"
        );
    }
}
