// crates/loadboard-core/src/collab.rs

//! # Collaborators
//!
//! The pipeline does not render anything itself. Screens, toasts and modal
//! dialogs belong to the front end, which plugs them in through these traits.

use crate::routes::Route;
use serde::{Deserialize, Serialize};

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Displays short-lived messages ("toasts").
pub trait Notifier {
    fn notify(&mut self, severity: Severity, message: &str);
}

/// Switches the visible screen.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// The user's answer to a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Confirm,
    Cancel,
}

/// Asks the user a yes/no question.
pub trait ConfirmPrompt {
    fn ask(&mut self, title: &str, message: &str) -> Decision;
}

/// An open confirmation dialog.
///
/// Holding a `ConfirmDialog` means the dialog is open; [`ConfirmDialog::close`]
/// consumes it and runs exactly one of the two callbacks, so neither can fire
/// twice and both can never fire.
pub struct ConfirmDialog<T> {
    title: String,
    message: String,
    on_confirm: Box<dyn FnOnce() -> T>,
    on_cancel: Box<dyn FnOnce() -> T>,
}

impl<T> ConfirmDialog<T> {
    pub fn open(
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: impl FnOnce() -> T + 'static,
        on_cancel: impl FnOnce() -> T + 'static,
    ) -> Self {
        ConfirmDialog {
            title: title.into(),
            message: message.into(),
            on_confirm: Box::new(on_confirm),
            on_cancel: Box::new(on_cancel),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Ask `prompt` and close with its answer.
    pub fn resolve_with<P: ConfirmPrompt + ?Sized>(self, prompt: &mut P) -> T {
        let decision = prompt.ask(&self.title, &self.message);
        self.close(decision)
    }

    pub fn close(self, decision: Decision) -> T {
        match decision {
            Decision::Confirm => (self.on_confirm)(),
            Decision::Cancel => (self.on_cancel)(),
        }
    }
}

impl<T> std::fmt::Debug for ConfirmDialog<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmDialog")
            .field("title", &self.title)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Collects notifications in memory. Handy for tests and headless front ends.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub messages: Vec<(Severity, String)>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.messages.push((severity, message.to_string()));
    }
}

/// Remembers the routes it was sent to.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pub history: Vec<Route>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) {
        self.history.push(route);
    }
}

/// Always answers with the same decision.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompt(pub Decision);

impl ConfirmPrompt for FixedPrompt {
    fn ask(&mut self, _title: &str, _message: &str) -> Decision {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn closing_runs_exactly_one_callback() {
        let confirmed = Rc::new(Cell::new(0));
        let cancelled = Rc::new(Cell::new(0));
        let (c, x) = (confirmed.clone(), cancelled.clone());
        let dialog = ConfirmDialog::open(
            "Confirm Booking",
            "Book it?",
            move || c.set(c.get() + 1),
            move || x.set(x.get() + 1),
        );
        dialog.close(Decision::Cancel);
        assert_eq!((confirmed.get(), cancelled.get()), (0, 1));
    }

    #[test]
    fn resolve_with_forwards_title_and_message() {
        struct Echo(Vec<String>);
        impl ConfirmPrompt for Echo {
            fn ask(&mut self, title: &str, message: &str) -> Decision {
                self.0.push(format!("{title}: {message}"));
                Decision::Confirm
            }
        }
        let mut prompt = Echo(Vec::new());
        let out = ConfirmDialog::open("T", "M", || "yes", || "no").resolve_with(&mut prompt);
        assert_eq!(out, "yes");
        assert_eq!(prompt.0, ["T: M"]);
    }
}
