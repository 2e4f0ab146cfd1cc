//! Error types for roster-view.

use thiserror::Error;

/// Errors that can occur while resolving rows or inflating row templates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A row index was outside the roster's current bounds.
    ///
    /// Hosts derive indices from the adapter's own row count, so hitting this
    /// is a programming-contract violation rather than a recoverable state.
    #[error("row {row} out of range for roster of length {len}")]
    RowOutOfRange { row: usize, len: usize },

    /// An inflated row template is missing a required label slot.
    #[error("row template has no label slot named {id:?}")]
    MissingLabelSlot { id: String },
}

/// Result type for roster-view operations.
pub type RosterResult<T> = Result<T, RosterError>;
