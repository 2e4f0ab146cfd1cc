//! View layer for roster-view.
//!
//! Everything the host rendering side needs to show a roster:
//!
//! - [`Label`]: a writable text slot
//! - [`RowWidget`], [`RowFactory`], [`PersonRowTemplate`]: a row's widget
//!   tree, the capability for inflating one, and the stock two-label template
//! - [`PersonRowHolder`]: the view holder that caches its label handles and
//!   binds one record per call
//! - [`RowAdapter`], [`PersonAdapter`]: the pull contract between the host
//!   and the data, and its person implementation
//! - [`RosterView`]: a recycling driver that windows the adapter's rows
//!
//! The view layer is strictly pull-based. Hosts call in; nothing here calls
//! back asynchronously.

mod adapter;
mod holder;
mod label;
mod list_view;
mod row;

pub use adapter::{PersonAdapter, RowAdapter, RowKind};
pub use holder::PersonRowHolder;
pub use label::Label;
pub use list_view::RosterView;
pub use row::{LabelKey, PersonRowTemplate, RowFactory, RowWidget, slots};
