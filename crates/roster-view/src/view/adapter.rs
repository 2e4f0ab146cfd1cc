//! The pull-based row adapter contract and its person implementation.

use std::sync::Arc;

use crate::error::RosterResult;
use crate::logging::targets;
use crate::model::RosterModel;

use super::holder::PersonRowHolder;
use super::row::RowFactory;

/// Hint distinguishing row template kinds within one list.
///
/// Hosts pass the kind back to [`RowAdapter::create_row`] so adapters with
/// heterogeneous rows can pick a template per index. This sample has exactly
/// one row kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowKind(pub u32);

/// The contract a scrolling list host drives to render rows.
///
/// Hosts call these methods in any order, any number of times per row
/// handle: typically once per row that scrolls into view, repeated as
/// handles recycle. Adapters answer from current data and hold no rendering
/// state of their own; in particular an adapter must never retain the row
/// handle passed to [`populate_row`](Self::populate_row) beyond the call.
///
/// # Implementation Requirements
///
/// At minimum, you must implement:
/// - [`row_count`](Self::row_count) - Live number of rows
/// - [`create_row`](Self::create_row) - Produce a fresh row handle
/// - [`populate_row`](Self::populate_row) - Bind the record at an index
///
/// [`row_kind`](Self::row_kind) has a single-kind default.
pub trait RowAdapter: Send + Sync {
    /// The row visual handle produced by [`create_row`](Self::create_row).
    type Row;

    /// Returns the number of rows currently available.
    ///
    /// Read live from the underlying data on every call; callable at any
    /// time, including before any row has been created.
    fn row_count(&self) -> usize;

    /// Returns the template kind for the row at `index`.
    ///
    /// The default implementation reports a single kind for every row.
    fn row_kind(&self, _index: usize) -> RowKind {
        RowKind::default()
    }

    /// Produces a fresh row handle for the given kind.
    ///
    /// Consumes the factory capability exactly once.
    fn create_row(&self, kind: RowKind, factory: &dyn RowFactory) -> RosterResult<Self::Row>;

    /// Populates `row` with the record at `index`.
    ///
    /// Fails when `index >= row_count()`; the failure propagates from the
    /// underlying record lookup rather than a separate bounds check.
    fn populate_row(&self, row: &mut Self::Row, index: usize) -> RosterResult<()>;
}

/// Bridges a shared [`RosterModel`] to the row contract.
///
/// The adapter is stateless beyond the model reference: every operation is a
/// pure function of the current sequence contents and the given index.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use roster_view::model::{Person, RosterModel};
/// use roster_view::view::{PersonAdapter, PersonRowTemplate, RowAdapter, RowKind};
///
/// let roster = Arc::new(RosterModel::new(vec![Person::new("Jane Doe", 43)]));
/// let adapter = PersonAdapter::new(roster);
///
/// let mut row = adapter
///     .create_row(RowKind::default(), &PersonRowTemplate)
///     .unwrap();
/// adapter.populate_row(&mut row, 0).unwrap();
/// assert_eq!(row.age_text(), "Age: 43");
/// ```
pub struct PersonAdapter {
    roster: Arc<RosterModel>,
}

impl PersonAdapter {
    /// Creates an adapter over the given roster.
    pub fn new(roster: Arc<RosterModel>) -> Self {
        Self { roster }
    }

    /// The underlying roster.
    pub fn roster(&self) -> &Arc<RosterModel> {
        &self.roster
    }
}

impl RowAdapter for PersonAdapter {
    type Row = PersonRowHolder;

    fn row_count(&self) -> usize {
        self.roster.len()
    }

    fn create_row(&self, _kind: RowKind, factory: &dyn RowFactory) -> RosterResult<PersonRowHolder> {
        tracing::trace!(target: targets::VIEW, "creating person row");
        PersonRowHolder::create(factory)
    }

    fn populate_row(&self, row: &mut PersonRowHolder, index: usize) -> RosterResult<()> {
        let person = self.roster.person(index)?;
        row.bind(&person);
        Ok(())
    }
}

static_assertions::assert_impl_all!(PersonAdapter: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::model::Person;
    use crate::view::row::PersonRowTemplate;

    fn sample_adapter() -> PersonAdapter {
        PersonAdapter::new(Arc::new(RosterModel::new(vec![
            Person::new("Patrick Feltes", 21),
            Person::new("Jane Doe", 43),
            Person::new("John Smith", 44),
            Person::new("Johnny Appleseed", 16),
        ])))
    }

    #[test]
    fn test_row_count() {
        let adapter = sample_adapter();
        assert_eq!(adapter.row_count(), 4);
    }

    #[test]
    fn test_populate_row() {
        let adapter = sample_adapter();
        let mut row = adapter
            .create_row(RowKind::default(), &PersonRowTemplate)
            .unwrap();

        adapter.populate_row(&mut row, 1).unwrap();
        assert_eq!(row.name_text(), "Jane Doe");
        assert_eq!(row.age_text(), "Age: 43");
    }

    #[test]
    fn test_populate_every_row() {
        let adapter = sample_adapter();
        let mut row = adapter
            .create_row(RowKind::default(), &PersonRowTemplate)
            .unwrap();

        let expected = [
            ("Patrick Feltes", "Age: 21"),
            ("Jane Doe", "Age: 43"),
            ("John Smith", "Age: 44"),
            ("Johnny Appleseed", "Age: 16"),
        ];
        for (index, (name, age)) in expected.iter().enumerate() {
            adapter.populate_row(&mut row, index).unwrap();
            assert_eq!(row.name_text(), *name);
            assert_eq!(row.age_text(), *age);
        }
    }

    #[test]
    fn test_populate_row_out_of_range() {
        let adapter = sample_adapter();
        let mut row = adapter
            .create_row(RowKind::default(), &PersonRowTemplate)
            .unwrap();

        let err = adapter.populate_row(&mut row, 4).unwrap_err();
        assert_eq!(err, RosterError::RowOutOfRange { row: 4, len: 4 });
    }

    #[test]
    fn test_row_count_tracks_model() {
        let adapter = sample_adapter();

        adapter.roster().push(Person::new("Fifth", 50));
        assert_eq!(adapter.row_count(), 5);

        adapter.roster().set_people(vec![Person::new("Only", 1)]);
        assert_eq!(adapter.row_count(), 1);
    }

    #[test]
    fn test_single_row_kind() {
        let adapter = sample_adapter();
        assert_eq!(adapter.row_kind(0), RowKind::default());
        assert_eq!(adapter.row_kind(3), RowKind::default());
    }
}
