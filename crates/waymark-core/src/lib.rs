//! Core systems for Waymark.
//!
//! This crate provides the foundational components of the Waymark wizard
//! widget core:
//!
//! - **Signal/Slot System**: Type-safe, synchronous observer notifications
//! - **Property System**: Reactive properties with change detection
//! - **Logging**: `tracing` integration with per-subsystem targets
//!
//! # Signal/Slot Example
//!
//! ```
//! use waymark_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
