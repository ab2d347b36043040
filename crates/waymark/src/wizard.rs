//! Wizard widget core.
//!
//! This module provides [`Wizard`], the state container for a step-by-step
//! flow with tabbed navigation. It owns the step list, the disabled-index
//! set, and the current step, and exposes the navigation API the view layer
//! calls. Rendering is the host's job; the host reads back the state it
//! should display via [`Wizard::tab_states`] and [`Wizard::steps`].
//!
//! # Example
//!
//! ```
//! use waymark::{StepContent, Wizard};
//!
//! let mut wizard = Wizard::new();
//!
//! // Connect to step changes
//! wizard.step_changed.connect(|change| {
//!     println!("now on step {} (tab: {})", change.current_step, change.is_tab);
//! });
//!
//! // The host projects the step content once it is known
//! wizard.initialize(vec![
//!     StepContent::with_tab("Account"),
//!     StepContent::with_tab("Profile"),
//!     StepContent::with_tab("Summary"),
//! ])?;
//!
//! wizard.set_disabled_steps(vec![1]);
//! wizard.set_current_step(1); // skips the disabled step, lands on 2
//! assert_eq!(wizard.current_step(), 2);
//! # Ok::<(), waymark::WaymarkError>(())
//! ```

use waymark_core::{Property, Signal};

use crate::attr::AttrValue;
use crate::error::{Result, WaymarkError};
use crate::resolver::resolve_step_index;
use crate::step::{StepContent, WizardStep};

/// Layout orientation of the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Tabs in a horizontal strip above the content.
    #[default]
    Landscape,
    /// Tabs in a vertical strip beside the content.
    Portrait,
}

impl Orientation {
    /// Parse an orientation from a host attribute value.
    ///
    /// Any string other than `"portrait"` reads as landscape. Non-string
    /// values return `None`.
    fn from_attr(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Str(text) if text == "portrait" => Some(Orientation::Portrait),
            AttrValue::Str(_) => Some(Orientation::Landscape),
            _ => None,
        }
    }
}

/// Payload of the [`Wizard::step_changed`] notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepChange {
    /// The resolved index of the step that became current.
    pub current_step: i32,
    /// Whether the navigation originated from direct tab interaction.
    pub is_tab: bool,
}

/// Display state of one tab, as the view layer should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabState {
    /// The tab label.
    pub label: String,
    /// Whether this tab's step is the current panel.
    pub active: bool,
    /// Whether the tab reacts to clicks (not globally disabled, not in the
    /// disabled set).
    pub enabled: bool,
    /// Whether this tab's step index is in the disabled set.
    pub disabled: bool,
    /// Whether the tab should be hidden (hide-when-disabled is set and the
    /// step is disabled).
    pub hidden: bool,
}

/// The step-by-step wizard state container.
///
/// `Wizard` is the sole owner of its state; instances share nothing. All
/// operations execute synchronously in the calling thread.
///
/// # Navigation
///
/// Every public navigation entry point routes through the step resolver
/// ([`crate::resolver::resolve_step_index`]) and then the panel activator
/// ([`set_panel`](Self::set_panel) internally), which is the only operation
/// that mutates the active step.
///
/// # Signals
///
/// - `step_changed(StepChange)`: Emitted when the current step changes
pub struct Wizard {
    /// Layout orientation of the tab strip.
    orientation: Property<Orientation>,
    /// Whether the whole tab strip is hidden.
    hidden_tabs: Property<bool>,
    /// Whether direct tab interaction is globally disabled.
    disable_tabs: Property<bool>,
    /// Whether disabled steps hide their tabs.
    hidden_disabled_steps: Property<bool>,
    /// Indices of steps excluded from direct navigation.
    disabled_steps: Property<Vec<i32>>,

    /// The ordered step list, populated once by `initialize`.
    steps: Vec<WizardStep>,
    /// Current step index. Holds the requested index until initialization.
    current_step: i32,
    /// Whether `initialize` has run.
    initialized: bool,

    /// Signal emitted when the current step changes.
    pub step_changed: Signal<StepChange>,
}

impl Wizard {
    /// Create a wizard with no steps.
    ///
    /// Configuration may be applied immediately; the step list is supplied
    /// later by [`initialize`](Self::initialize).
    pub fn new() -> Self {
        Self {
            orientation: Property::new(Orientation::Landscape),
            hidden_tabs: Property::new(false),
            disable_tabs: Property::new(false),
            hidden_disabled_steps: Property::new(false),
            disabled_steps: Property::new(Vec::new()),
            steps: Vec::new(),
            current_step: 0,
            initialized: false,
            step_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Populate the step list from host-projected content.
    ///
    /// Called once by the host collaborator when the surrounding content is
    /// known. Each projected step must carry a tab label; a step without one
    /// is fatal and reported through the diagnostic channel.
    ///
    /// On success the wizard activates the configured current step, resolved
    /// against the disabled set.
    pub fn initialize(&mut self, contents: Vec<StepContent>) -> Result<()> {
        if self.initialized {
            return Err(WaymarkError::AlreadyInitialized);
        }

        if contents.is_empty() {
            tracing::error!(target: "waymark::wizard", "no steps found in wizard content");
        }

        let mut steps = Vec::with_capacity(contents.len());
        for (index, content) in contents.iter().enumerate() {
            match content.tab_label() {
                Some(label) => steps.push(WizardStep::new(label)),
                None => {
                    tracing::error!(
                        target: "waymark::wizard",
                        step = index,
                        "step content has no tab label"
                    );
                    return Err(WaymarkError::MissingTabLabel { step: index });
                }
            }
        }

        self.steps = steps;
        self.initialized = true;

        let target = self.resolve(self.current_step);
        self.set_panel(target, false);
        Ok(())
    }

    /// Whether `initialize` has populated the step list.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // =========================================================================
    // Steps
    // =========================================================================

    /// The number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Get a step by index.
    pub fn step(&self, index: i32) -> Option<&WizardStep> {
        usize::try_from(index).ok().and_then(|i| self.steps.get(i))
    }

    /// All steps in order.
    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    // =========================================================================
    // Current Step
    // =========================================================================

    /// The current step index.
    pub fn current_step(&self) -> i32 {
        self.current_step
    }

    /// Request a step change.
    ///
    /// The request is resolved against the disabled set (§ resolver) and the
    /// resolved index is applied as the new panel. Before initialization the
    /// resolved index is only stored; `initialize` applies it.
    pub fn set_current_step(&mut self, index: impl Into<AttrValue>) {
        let Some(requested) = index.into().as_index() else {
            return;
        };

        let target = self.resolve(requested);
        if self.initialized && !self.steps.is_empty() {
            self.set_panel(target, false);
        } else {
            self.current_step = target;
        }
    }

    /// Handle a direct click on the tab at `index`.
    ///
    /// Unlike programmatic navigation this does not resolve the request: a
    /// click on a disabled tab is rejected outright, and all clicks are
    /// rejected while tab navigation is globally disabled.
    pub fn click_tab(&mut self, index: i32) -> bool {
        self.set_panel(index, true)
    }

    // =========================================================================
    // Disabled Steps
    // =========================================================================

    /// Replace the disabled-step index set.
    ///
    /// Accepts an index list; any other value kind is silently ignored.
    /// Disabling the active step does not deactivate it; the change takes
    /// effect on the next navigation.
    pub fn set_disabled_steps(&mut self, value: impl Into<AttrValue>) {
        let value = value.into();
        if let Some(indices) = value.as_index_list() {
            self.disabled_steps.set(indices.to_vec());
        }
    }

    /// Add one index to the disabled set.
    pub fn add_disabled_step(&mut self, index: i32) {
        self.disabled_steps.update(|set| {
            if !set.contains(&index) {
                set.push(index);
            }
        });
    }

    /// Remove one index from the disabled set.
    pub fn remove_disabled_step(&mut self, index: i32) {
        self.disabled_steps.update(|set| {
            set.retain(|&i| i != index);
        });
    }

    /// The disabled-step index set.
    pub fn disabled_steps(&self) -> Vec<i32> {
        self.disabled_steps.get()
    }

    /// Whether the step at `index` is in the disabled set.
    pub fn is_step_disabled(&self, index: i32) -> bool {
        self.disabled_steps.with(|set| set.contains(&index))
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The tab strip orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation.get()
    }

    /// Set the tab strip orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation.set(orientation);
    }

    /// Whether the whole tab strip is hidden.
    pub fn tabs_hidden(&self) -> bool {
        self.hidden_tabs.get()
    }

    /// Set whether the tab strip is hidden.
    ///
    /// Boolean-like: accepts `bool` or `"yes"`/`"no"`; unrelated value kinds
    /// leave the flag unchanged.
    pub fn set_hidden_tabs(&mut self, value: impl Into<AttrValue>) {
        if let Some(flag) = value.into().as_toggle() {
            self.hidden_tabs.set(flag);
        }
    }

    /// Whether direct tab interaction is globally disabled.
    pub fn tabs_disabled(&self) -> bool {
        self.disable_tabs.get()
    }

    /// Set whether direct tab interaction is globally disabled.
    ///
    /// Boolean-like: accepts `bool` or `"yes"`/`"no"`; unrelated value kinds
    /// leave the flag unchanged.
    pub fn set_disable_tabs(&mut self, value: impl Into<AttrValue>) {
        if let Some(flag) = value.into().as_toggle() {
            self.disable_tabs.set(flag);
        }
    }

    /// Whether disabled steps hide their tabs.
    pub fn hidden_disabled_steps(&self) -> bool {
        self.hidden_disabled_steps.get()
    }

    /// Set whether disabled steps hide their tabs.
    ///
    /// Boolean-like: accepts `bool` or `"yes"`/`"no"`; unrelated value kinds
    /// leave the flag unchanged.
    pub fn set_hidden_disabled_steps(&mut self, value: impl Into<AttrValue>) {
        if let Some(flag) = value.into().as_toggle() {
            self.hidden_disabled_steps.set(flag);
        }
    }

    /// Apply a declarative attribute by name.
    ///
    /// This is the host-markup entry point; unknown names are ignored.
    pub fn set_attribute(&mut self, name: &str, value: AttrValue) {
        match name {
            "orientation" => {
                if let Some(orientation) = Orientation::from_attr(&value) {
                    self.orientation.set(orientation);
                }
            }
            "hidden-tabs" => self.set_hidden_tabs(value),
            "disable-tabs" => self.set_disable_tabs(value),
            "disable-steps" => self.set_disabled_steps(value),
            "hidden-disable-steps" => self.set_hidden_disabled_steps(value),
            "current-step" => self.set_current_step(value),
            _ => {
                tracing::debug!(
                    target: "waymark::wizard",
                    attribute = name,
                    "ignoring unknown attribute"
                );
            }
        }
    }

    // =========================================================================
    // Tab State Reporting
    // =========================================================================

    /// Per-tab display state for the view layer.
    ///
    /// Mirrors what the tab strip renders: which tab is active, which react
    /// to clicks, and which are hidden because their step is disabled.
    pub fn tab_states(&self) -> Vec<TabState> {
        let tabs_disabled = self.disable_tabs.get();
        let hide_disabled = self.hidden_disabled_steps.get();
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let disabled = self.is_step_disabled(index as i32);
                TabState {
                    label: step.label().to_string(),
                    active: step.is_active(),
                    enabled: !tabs_disabled && !disabled,
                    disabled,
                    hidden: hide_disabled && disabled,
                }
            })
            .collect()
    }

    // =========================================================================
    // Navigation Internals
    // =========================================================================

    /// Resolve a requested index against the disabled set.
    fn resolve(&self, requested: i32) -> i32 {
        if !self.initialized {
            return requested;
        }
        self.disabled_steps.with(|disabled| {
            resolve_step_index(requested, self.current_step, disabled, self.steps.len())
        })
    }

    /// Apply `index` as the new current panel.
    ///
    /// The sole state-mutating operation: deactivates every step, activates
    /// the step at the (clamped) target index, and notifies observers.
    /// Returns whether the panel changed.
    fn set_panel(&mut self, index: i32, is_tab: bool) -> bool {
        if self.disable_tabs.get() && is_tab {
            tracing::trace!(
                target: "waymark::wizard",
                index,
                "tab navigation is disabled, ignoring click"
            );
            return false;
        }
        if !self.initialized || self.steps.is_empty() {
            return false;
        }
        if self.is_step_disabled(index) {
            tracing::trace!(target: "waymark::wizard", index, "target step is disabled");
            return false;
        }

        // A below-zero index from the resolver passes the disabled check
        // above and clamps to 0 here, so the first step activates even when
        // it is in the disabled set.
        let last = self.steps.len() as i32 - 1;
        let resolved = index.clamp(0, last);
        self.current_step = resolved;

        for step in &mut self.steps {
            step.set_active(false);
        }
        self.steps[resolved as usize].set_active(true);

        tracing::debug!(
            target: "waymark::wizard",
            current_step = resolved,
            is_tab,
            "panel activated"
        );
        self.step_changed.emit(StepChange {
            current_step: resolved,
            is_tab,
        });
        true
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
