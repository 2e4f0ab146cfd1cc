//! The ordered roster of person records.

use parking_lot::RwLock;

use crate::error::{RosterError, RosterResult};
use crate::logging::targets;
use crate::signal::Signal;

use super::person::Person;

/// Signals emitted by [`RosterModel`] when its contents change.
///
/// Modifications emit paired signals: the `*_about_to_*` signal fires before
/// the sequence changes, the matching signal after. Listeners that cache
/// anything derived from the sequence should invalidate on the second of the
/// pair.
pub struct ModelSignals {
    /// Emitted just before rows are inserted. Args: (first row, last row).
    pub rows_about_to_be_inserted: Signal<(usize, usize)>,
    /// Emitted after rows have been inserted. Args: (first row, last row).
    pub rows_inserted: Signal<(usize, usize)>,
    /// Emitted before the whole sequence is replaced.
    pub model_about_to_reset: Signal<()>,
    /// Emitted after the whole sequence has been replaced.
    pub model_reset: Signal<()>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            rows_about_to_be_inserted: Signal::new(),
            rows_inserted: Signal::new(),
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
        }
    }

    /// Emits signals for row insertion.
    ///
    /// Calls the provided function between the about_to_be_inserted and
    /// inserted signals.
    pub fn emit_rows_inserted<F>(&self, first: usize, last: usize, insert_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_inserted.emit((first, last));
        insert_fn();
        self.rows_inserted.emit((first, last));
    }

    /// Emits signals for a model reset.
    ///
    /// Calls the provided function between the about_to_reset and reset
    /// signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        self.model_about_to_reset.emit(());
        reset_fn();
        self.model_reset.emit(());
    }
}

/// The ordered sequence of [`Person`] records backing a list view.
///
/// Insertion order is display order; names and ages carry no uniqueness
/// constraints. The length is read from the sequence on every call, never
/// cached, so the row count a view sees is always live.
///
/// # Example
///
/// ```
/// use roster_view::model::{Person, RosterModel};
///
/// let roster = RosterModel::new(vec![
///     Person::new("Jane Doe", 43),
///     Person::new("John Smith", 44),
/// ]);
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.person(1).unwrap().name(), "John Smith");
/// ```
pub struct RosterModel {
    people: RwLock<Vec<Person>>,
    signals: ModelSignals,
}

impl RosterModel {
    /// Creates a roster holding the given records.
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people: RwLock::new(people),
            signals: ModelSignals::new(),
        }
    }

    /// Creates an empty roster.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the number of records in the roster.
    pub fn len(&self) -> usize {
        self.people.read().len()
    }

    /// Returns `true` if the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.people.read().is_empty()
    }

    /// Returns the record at `row`.
    ///
    /// Fails with [`RosterError::RowOutOfRange`] when `row` is at or past the
    /// end of the sequence.
    pub fn person(&self, row: usize) -> RosterResult<Person> {
        let people = self.people.read();
        people.get(row).cloned().ok_or(RosterError::RowOutOfRange {
            row,
            len: people.len(),
        })
    }

    /// Returns a read-only view of the records.
    pub fn people(&self) -> impl std::ops::Deref<Target = Vec<Person>> + '_ {
        self.people.read()
    }

    /// Appends a record to the end of the roster.
    pub fn push(&self, person: Person) {
        let row = self.people.read().len();
        tracing::debug!(target: targets::MODEL, row, "appending person");
        self.signals.emit_rows_inserted(row, row, || {
            self.people.write().push(person);
        });
    }

    /// Replaces all records in the roster.
    pub fn set_people(&self, people: Vec<Person>) {
        tracing::debug!(target: targets::MODEL, count = people.len(), "replacing roster");
        self.signals.emit_reset(|| {
            *self.people.write() = people;
        });
    }

    /// Returns the signals for this roster.
    pub fn signals(&self) -> &ModelSignals {
        &self.signals
    }
}

static_assertions::assert_impl_all!(RosterModel: Send, Sync);
