//! Logging facilities for roster-view.
//!
//! The crate is instrumented with the `tracing` crate. Installing a
//! subscriber is the application's concern:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Model layer target (roster mutations, record lookups).
    pub const MODEL: &str = "roster_view::model";
    /// View layer target (row creation, binding, recycling).
    pub const VIEW: &str = "roster_view::view";
    /// Signal emission target.
    pub const SIGNAL: &str = "roster_view::signal";
}
