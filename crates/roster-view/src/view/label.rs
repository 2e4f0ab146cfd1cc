//! Label widget for text display.

use crate::signal::Signal;

/// A writable text slot within a row.
///
/// Labels hold plain text and notify listeners when it changes. Binding
/// rewrites a label's text wholesale; there is no partial update.
pub struct Label {
    /// The text to display.
    text: String,

    /// Signal emitted when the text changes.
    pub text_changed: Signal<String>,
}

impl Default for Label {
    fn default() -> Self {
        Self::new("")
    }
}

impl Label {
    /// Creates a label with the given initial text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_changed: Signal::new(),
        }
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets the text, emitting [`text_changed`](Self::text_changed) if it
    /// differs from the current content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.text = text;
        self.text_changed.emit(self.text.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_set_text() {
        let mut label = Label::new("old");
        label.set_text("new");
        assert_eq!(label.text(), "new");
    }

    #[test]
    fn test_text_changed_signal() {
        let mut label = Label::default();
        let changes = Arc::new(Mutex::new(Vec::new()));

        let recv = changes.clone();
        label.text_changed.connect(move |text| {
            recv.lock().push(text.clone());
        });

        label.set_text("first");
        label.set_text("first"); // unchanged, no emission
        label.set_text("second");

        assert_eq!(*changes.lock(), vec!["first", "second"]);
    }
}
