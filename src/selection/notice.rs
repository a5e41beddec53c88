//! User-facing notices
//!
//! Notices report non-fatal "nothing to do" outcomes such as "no startup
//! projects found". They are meant for the human at the editor, so they are
//! not routed through `tracing`.

use console::Style;

/// Delivers a one-line notice to the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Prints notices to stderr, leaving stdout for machine-readable output
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", Style::new().yellow().apply_to(message));
    }
}
