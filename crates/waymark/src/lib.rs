//! # Waymark
//!
//! A step-by-step wizard navigation core: a tabbed multi-step state
//! container with disabled-step resolution, host-attribute configuration,
//! and change notification.
//!
//! The crate is renderer-agnostic. [`Wizard`] owns the navigation state and
//! the rules for moving through it; a host (a GUI toolkit, a TUI, a web
//! view) projects step content into it, forwards user interaction, and reads
//! back [`Wizard::tab_states`] to draw the tab strip.
//!
//! ## Quick Start
//!
//! ```
//! use waymark::{StepContent, Wizard};
//!
//! let mut wizard = Wizard::new();
//! wizard.initialize(vec![
//!     StepContent::with_tab("Account"),
//!     StepContent::with_tab("Payment"),
//!     StepContent::with_tab("Confirm"),
//! ])?;
//!
//! wizard.set_disabled_steps(vec![1]);
//! wizard.set_current_step(1);
//! assert_eq!(wizard.current_step(), 2); // resolved past the disabled step
//! # Ok::<(), waymark::WaymarkError>(())
//! ```
//!
//! ## Crates
//!
//! - `waymark`: the wizard widget, step model, and attribute surface
//! - `waymark-core`: signals and observable properties the widget builds on

pub mod attr;
pub mod error;
pub mod resolver;
pub mod step;
pub mod wizard;

pub use attr::AttrValue;
pub use error::{Result, WaymarkError};
pub use resolver::resolve_step_index;
pub use step::{StepContent, WizardStep};
pub use wizard::{Orientation, StepChange, TabState, Wizard};

// Re-export the support crate so hosts depend on one crate only.
pub use waymark_core::{ConnectionGuard, ConnectionId, Property, Signal};
