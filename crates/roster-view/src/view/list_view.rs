//! A recycling list view driving a row adapter.

use std::ops::Range;
use std::sync::Arc;

use crate::error::RosterResult;
use crate::logging::targets;

use super::adapter::RowAdapter;
use super::row::RowFactory;

const DEFAULT_VIEWPORT_ROWS: usize = 8;

/// A viewport-windowed list view that pulls rows from a [`RowAdapter`].
///
/// The view owns all rendering state: the scroll position, the currently
/// bound row handles, and a recycle pool. Scrolling moves a window of
/// `viewport_rows` rows over the adapter's index space; handles that leave
/// the window return to the pool and are rebound when rows scroll back in,
/// so the number of live handles never exceeds the viewport.
///
/// The view drives the adapter, never the reverse: a refresh happens only
/// when the host calls [`refresh`](Self::refresh),
/// [`invalidate`](Self::invalidate), or one of the scroll methods.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use roster_view::model::{Person, RosterModel};
/// use roster_view::view::{PersonAdapter, PersonRowTemplate, RosterView};
///
/// let roster = Arc::new(RosterModel::new(vec![
///     Person::new("Jane Doe", 43),
///     Person::new("John Smith", 44),
/// ]));
/// let mut view = RosterView::new(PersonAdapter::new(roster), Arc::new(PersonRowTemplate));
/// view.refresh().unwrap();
///
/// assert_eq!(view.row(0).unwrap().name_text(), "Jane Doe");
/// ```
pub struct RosterView<A: RowAdapter> {
    adapter: A,
    factory: Arc<dyn RowFactory>,

    // Scrolling
    viewport_rows: usize,
    scroll_offset: usize,

    // Bound handles for the visible window, sorted by row index.
    bound: Vec<(usize, A::Row)>,
    // Handles recycled out of the window, awaiting reuse.
    pool: Vec<A::Row>,
}

impl<A: RowAdapter> RosterView<A> {
    /// Creates a view over the given adapter and row factory.
    pub fn new(adapter: A, factory: Arc<dyn RowFactory>) -> Self {
        Self {
            adapter,
            factory,
            viewport_rows: DEFAULT_VIEWPORT_ROWS,
            scroll_offset: 0,
            bound: Vec::new(),
            pool: Vec::new(),
        }
    }

    /// Sets the viewport height in rows using builder pattern.
    ///
    /// Clamped to at least one row.
    pub fn with_viewport_rows(mut self, rows: usize) -> Self {
        self.viewport_rows = rows.max(1);
        self
    }

    /// The adapter this view pulls from.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// The viewport height in rows.
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// The first visible row index.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// The window of row indices currently visible.
    ///
    /// Clamped against the adapter's live row count, so the range is valid
    /// even after the underlying data shrinks.
    pub fn visible_range(&self) -> Range<usize> {
        let count = self.adapter.row_count();
        let start = self.scroll_offset.min(count.saturating_sub(self.viewport_rows));
        let end = count.min(start + self.viewport_rows);
        start..end
    }

    /// Scrolls so that `row` is the first visible row, then refreshes.
    ///
    /// The offset is clamped so the viewport never extends past the end.
    pub fn scroll_to(&mut self, row: usize) -> RosterResult<()> {
        let count = self.adapter.row_count();
        self.scroll_offset = row.min(count.saturating_sub(self.viewport_rows));
        self.refresh()
    }

    /// Scrolls by a signed number of rows, then refreshes.
    pub fn scroll_by(&mut self, delta: isize) -> RosterResult<()> {
        let target = if delta < 0 {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta as usize)
        };
        self.scroll_to(target)
    }

    /// Reconciles the bound handles with the visible window.
    ///
    /// Handles whose row left the window are recycled into the pool. Each
    /// newly visible row reuses a pooled handle when one is available,
    /// otherwise asks the adapter to create one, and is populated through
    /// the adapter either way. Rows that stayed visible keep their handle
    /// and are not rebound; use [`invalidate`](Self::invalidate) after a
    /// data change.
    pub fn refresh(&mut self) -> RosterResult<()> {
        let range = self.visible_range();
        self.scroll_offset = range.start;

        let mut kept: Vec<(usize, A::Row)> = Vec::with_capacity(range.len());
        let mut recycled = 0usize;
        for (row, handle) in self.bound.drain(..) {
            if range.contains(&row) {
                kept.push((row, handle));
            } else {
                self.pool.push(handle);
                recycled += 1;
            }
        }

        let mut created = 0usize;
        for row in range.clone() {
            if kept.iter().any(|(bound_row, _)| *bound_row == row) {
                continue;
            }
            let mut handle = match self.pool.pop() {
                Some(handle) => handle,
                None => {
                    created += 1;
                    self.adapter
                        .create_row(self.adapter.row_kind(row), self.factory.as_ref())?
                }
            };
            self.adapter.populate_row(&mut handle, row)?;
            kept.push((row, handle));
        }

        kept.sort_by_key(|(row, _)| *row);
        self.bound = kept;

        tracing::debug!(
            target: targets::VIEW,
            start = range.start,
            end = range.end,
            created,
            recycled,
            pooled = self.pool.len(),
            "refreshed viewport"
        );
        Ok(())
    }

    /// Recycles every bound handle and rebinds the visible window.
    ///
    /// Call after the underlying data changed in place (for instance a
    /// wholesale roster replacement) so rows that stayed visible pick up
    /// fresh contents.
    pub fn invalidate(&mut self) -> RosterResult<()> {
        self.pool.extend(self.bound.drain(..).map(|(_, handle)| handle));
        self.refresh()
    }

    /// The bound handle for a visible row, if any.
    pub fn row(&self, row: usize) -> Option<&A::Row> {
        self.bound
            .iter()
            .find(|(bound_row, _)| *bound_row == row)
            .map(|(_, handle)| handle)
    }

    /// Iterates the visible rows in display order.
    pub fn bound_rows(&self) -> impl Iterator<Item = (usize, &A::Row)> {
        self.bound.iter().map(|(row, handle)| (*row, handle))
    }

    /// Number of handles currently waiting in the recycle pool.
    pub fn pooled_rows(&self) -> usize {
        self.pool.len()
    }
}

static_assertions::assert_impl_all!(
    RosterView<super::adapter::PersonAdapter>: Send, Sync
);
