//! Terminal notifications for event changes.

use kinder_core::notify::{LogNotifier, Notification, Notifier};
use owo_colors::OwoColorize;

/// Prints one coloured line per change and forwards it to the log.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) {
        let line = format!("  {}", notification);
        if notification.is_failure() {
            eprintln!("{}", line.red());
        } else {
            println!("{}", line.green());
        }
        LogNotifier.notify(notification);
    }
}
