//! Prelude module for roster-view.
//!
//! Re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use roster_view::prelude::*;
//! ```

// Errors
pub use crate::error::{RosterError, RosterResult};

// Signal/slot system
pub use crate::signal::{ConnectionId, Signal};

// Model layer
pub use crate::model::{ModelSignals, Person, RosterModel};

// View layer
pub use crate::view::{
    Label, PersonAdapter, PersonRowHolder, PersonRowTemplate, RosterView, RowAdapter, RowFactory,
    RowKind, RowWidget,
};
