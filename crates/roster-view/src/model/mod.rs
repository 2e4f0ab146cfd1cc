//! Model layer for roster-view.
//!
//! The model owns the data and knows nothing about how it is displayed:
//!
//! - [`Person`]: the immutable name/age record shown per row
//! - [`RosterModel`]: the ordered sequence of records, with live length
//!   reporting and change signals
//!
//! Views never touch the sequence directly; they pull records through the
//! adapter contract in [`crate::view`] and connect to [`ModelSignals`] to
//! hear about changes.

mod person;
mod roster;

pub use person::Person;
pub use roster::{ModelSignals, RosterModel};
