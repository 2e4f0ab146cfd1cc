//! roster-view - a recycling list view for in-memory person rosters.
//!
//! This crate demonstrates the Model/View pattern at its smallest useful
//! scale: an ordered roster of [`Person`](model::Person) records, a pull-based
//! row-adapter contract, and a view that recycles row widgets through a pool
//! as its visible window scrolls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ RosterModel │<────│ PersonAdapter│<────│ RosterView  │
//! │  (records)  │     │ (RowAdapter) │     │ (recycling) │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                            v
//!                    ┌────────────────┐
//!                    │ PersonRowHolder│──> RowWidget (label slots)
//!                    └────────────────┘
//! ```
//!
//! The view drives everything: it asks the adapter for the row count, then
//! for each visible index produces (or reuses) a row holder and asks the
//! adapter to populate it. The adapter never initiates rendering.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use roster_view::model::{Person, RosterModel};
//! use roster_view::view::{PersonAdapter, PersonRowTemplate, RowAdapter, RowKind};
//!
//! let roster = Arc::new(RosterModel::new(vec![
//!     Person::new("Jane Doe", 43),
//! ]));
//! let adapter = PersonAdapter::new(roster);
//!
//! let mut row = adapter
//!     .create_row(RowKind::default(), &PersonRowTemplate)
//!     .unwrap();
//! adapter.populate_row(&mut row, 0).unwrap();
//!
//! assert_eq!(row.name_text(), "Jane Doe");
//! assert_eq!(row.age_text(), "Age: 43");
//! ```

pub mod error;
pub mod logging;
pub mod model;
pub mod prelude;
pub mod signal;
pub mod view;

pub use error::{RosterError, RosterResult};
pub use signal::{ConnectionId, Signal};
