//! The person view holder: cached label handles plus record binding.

use crate::error::{RosterError, RosterResult};
use crate::logging::targets;
use crate::model::Person;

use super::label::Label;
use super::row::{LabelKey, RowFactory, RowWidget, slots};

/// Owns one row widget and the cached keys of its two label slots.
///
/// The keys are located once at creation, so rebinding a recycled holder
/// costs two keyed lookups instead of two id searches through the widget
/// tree. Caching the keys is an optimization, not a contract: re-locating
/// by id on every bind would be equally correct.
pub struct PersonRowHolder {
    widget: RowWidget,
    name_label: LabelKey,
    age_label: LabelKey,
}

impl PersonRowHolder {
    /// Inflates a fresh row through the factory and caches its label handles.
    ///
    /// Consumes the factory capability exactly once. Fails with
    /// [`RosterError::MissingLabelSlot`] if the inflated template lacks the
    /// [`slots::NAME`] or [`slots::AGE`] slot.
    pub fn create(factory: &dyn RowFactory) -> RosterResult<Self> {
        let widget = factory.inflate();
        let name_label = Self::require_slot(&widget, slots::NAME)?;
        let age_label = Self::require_slot(&widget, slots::AGE)?;
        Ok(Self {
            widget,
            name_label,
            age_label,
        })
    }

    fn require_slot(widget: &RowWidget, id: &str) -> RosterResult<LabelKey> {
        widget
            .find_label(id)
            .ok_or_else(|| RosterError::MissingLabelSlot { id: id.to_owned() })
    }

    /// Binds one record into this row.
    ///
    /// Sets the name label to the record's name verbatim and the age label
    /// to `"Age: "` followed by the age in decimal. Both labels are
    /// rewritten on every call, so a recycled holder carries nothing over
    /// from the record it previously displayed.
    pub fn bind(&mut self, person: &Person) {
        tracing::trace!(target: targets::VIEW, name = person.name(), "binding row");
        if let Some(label) = self.widget.label_mut(self.name_label) {
            label.set_text(person.name());
        }
        if let Some(label) = self.widget.label_mut(self.age_label) {
            label.set_text(format!("Age: {}", person.age()));
        }
    }

    /// The currently bound name text.
    pub fn name_text(&self) -> &str {
        self.widget
            .label(self.name_label)
            .map(Label::text)
            .unwrap_or("")
    }

    /// The currently bound age text.
    pub fn age_text(&self) -> &str {
        self.widget
            .label(self.age_label)
            .map(Label::text)
            .unwrap_or("")
    }

    /// The underlying row widget.
    pub fn widget(&self) -> &RowWidget {
        &self.widget
    }
}

impl std::fmt::Debug for PersonRowHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonRowHolder")
            .field("name_label", &self.name_label)
            .field("age_label", &self.age_label)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(PersonRowHolder: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::row::PersonRowTemplate;

    #[test]
    fn test_create_and_bind() {
        let mut holder = PersonRowHolder::create(&PersonRowTemplate).unwrap();
        assert_eq!(holder.name_text(), "");
        assert_eq!(holder.age_text(), "");

        holder.bind(&Person::new("Jane Doe", 43));
        assert_eq!(holder.name_text(), "Jane Doe");
        assert_eq!(holder.age_text(), "Age: 43");
    }

    #[test]
    fn test_bind_is_idempotent() {
        let mut holder = PersonRowHolder::create(&PersonRowTemplate).unwrap();
        let person = Person::new("John Smith", 44);

        holder.bind(&person);
        let first = (holder.name_text().to_owned(), holder.age_text().to_owned());

        holder.bind(&person);
        assert_eq!(holder.name_text(), first.0);
        assert_eq!(holder.age_text(), first.1);
    }

    #[test]
    fn test_rebind_leaves_no_residue() {
        let mut holder = PersonRowHolder::create(&PersonRowTemplate).unwrap();

        holder.bind(&Person::new("Patrick Feltes", 21));
        holder.bind(&Person::new("John Smith", 44));

        assert_eq!(holder.name_text(), "John Smith");
        assert_eq!(holder.age_text(), "Age: 44");
    }

    #[test]
    fn test_bind_edge_values() {
        let mut holder = PersonRowHolder::create(&PersonRowTemplate).unwrap();
        holder.bind(&Person::new("", 0));
        assert_eq!(holder.name_text(), "");
        assert_eq!(holder.age_text(), "Age: 0");
    }

    #[test]
    fn test_missing_slot() {
        struct NameOnlyTemplate;

        impl RowFactory for NameOnlyTemplate {
            fn inflate(&self) -> RowWidget {
                let mut widget = RowWidget::new();
                widget.add_label(slots::NAME, Label::default());
                widget
            }
        }

        let err = PersonRowHolder::create(&NameOnlyTemplate).unwrap_err();
        assert_eq!(
            err,
            RosterError::MissingLabelSlot {
                id: slots::AGE.to_owned()
            }
        );
    }
}
