//! Logging facilities for Waymark.
//!
//! Waymark uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! All events carry an explicit target so subsystems can be filtered
//! individually, e.g. `RUST_LOG=waymark::wizard=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "waymark_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "waymark_core::signal";
    /// Wizard widget target.
    pub const WIZARD: &str = "waymark::wizard";
}
