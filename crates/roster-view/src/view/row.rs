//! Row widget templates and the inflation capability.
//!
//! A [`RowWidget`] is the visual handle for one list row: a small widget
//! tree whose label slots are addressable first by a string id (once, at
//! holder creation) and afterwards by the stable [`LabelKey`] the lookup
//! returned. Hosts supply a [`RowFactory`] to inflate fresh rows;
//! [`PersonRowTemplate`] is the stock two-label template.

use std::collections::HashMap;

use slotmap::{SlotMap, new_key_type};

use super::label::Label;

new_key_type! {
    /// A stable handle to a label slot within a [`RowWidget`].
    ///
    /// Keys stay valid for the lifetime of the widget they came from, so
    /// holders can cache them instead of repeating id lookups on every bind.
    pub struct LabelKey;
}

/// Well-known slot ids for the stock person row template.
pub mod slots {
    /// The slot showing the person's name.
    pub const NAME: &str = "name";
    /// The slot showing the person's age.
    pub const AGE: &str = "age";
}

/// A row's widget tree: a set of [`Label`] slots addressable by id.
///
/// Widgets are owned and recycled by the hosting view; adapters receive only
/// a transient borrow during binding.
pub struct RowWidget {
    labels: SlotMap<LabelKey, Label>,
    ids: HashMap<String, LabelKey>,
}

impl Default for RowWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl RowWidget {
    /// Creates an empty row widget.
    pub fn new() -> Self {
        Self {
            labels: SlotMap::with_key(),
            ids: HashMap::new(),
        }
    }

    /// Adds a label under the given slot id, returning its key.
    ///
    /// Adding a second label under an existing id replaces the first.
    pub fn add_label(&mut self, id: impl Into<String>, label: Label) -> LabelKey {
        let key = self.labels.insert(label);
        if let Some(old) = self.ids.insert(id.into(), key) {
            self.labels.remove(old);
        }
        key
    }

    /// Looks up the key for a slot id.
    pub fn find_label(&self, id: &str) -> Option<LabelKey> {
        self.ids.get(id).copied()
    }

    /// Returns the label for a key.
    pub fn label(&self, key: LabelKey) -> Option<&Label> {
        self.labels.get(key)
    }

    /// Returns the label for a key, mutably.
    pub fn label_mut(&mut self, key: LabelKey) -> Option<&mut Label> {
        self.labels.get_mut(key)
    }

    /// Number of label slots in this widget.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}

/// Capability for inflating a row's widget template.
///
/// Supplied by the host; consumed by the adapter exactly once per created
/// row. Implementations decide what a row looks like, the adapter decides
/// what goes into it.
pub trait RowFactory: Send + Sync {
    /// Inflates one fresh row widget.
    fn inflate(&self) -> RowWidget;
}

/// The stock person row template: two labels, [`slots::NAME`] and
/// [`slots::AGE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonRowTemplate;

impl RowFactory for PersonRowTemplate {
    fn inflate(&self) -> RowWidget {
        let mut widget = RowWidget::new();
        widget.add_label(slots::NAME, Label::default());
        widget.add_label(slots::AGE, Label::default());
        widget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_both_slots() {
        let widget = PersonRowTemplate.inflate();
        assert_eq!(widget.label_count(), 2);
        assert!(widget.find_label(slots::NAME).is_some());
        assert!(widget.find_label(slots::AGE).is_some());
    }

    #[test]
    fn test_find_label_miss() {
        let widget = PersonRowTemplate.inflate();
        assert!(widget.find_label("tooltip").is_none());
    }

    #[test]
    fn test_keys_resolve_to_labels() {
        let mut widget = RowWidget::new();
        let key = widget.add_label("title", Label::new("hello"));

        assert_eq!(widget.find_label("title"), Some(key));
        assert_eq!(widget.label(key).map(Label::text), Some("hello"));

        widget.label_mut(key).unwrap().set_text("world");
        assert_eq!(widget.label(key).map(Label::text), Some("world"));
    }

    #[test]
    fn test_add_label_replaces_existing_id() {
        let mut widget = RowWidget::new();
        let old = widget.add_label("title", Label::new("old"));
        let new = widget.add_label("title", Label::new("new"));

        assert_eq!(widget.label_count(), 1);
        assert!(widget.label(old).is_none());
        assert_eq!(widget.find_label("title"), Some(new));
        assert_eq!(widget.label(new).map(Label::text), Some("new"));
    }
}
