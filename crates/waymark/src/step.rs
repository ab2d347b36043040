//! Step model for the wizard.
//!
//! The host collaborator projects one [`StepContent`] per step when the
//! widget's content is known. Each projected step must carry a tab label;
//! a step without one is a fatal initialization condition.

/// Content projected into the wizard for a single step.
///
/// Maps the host's content model: the tab label is the designated sub-element
/// every step must expose, and its absence fails initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepContent {
    tab_label: Option<String>,
}

impl StepContent {
    /// Create step content with the required tab label.
    pub fn with_tab(label: impl Into<String>) -> Self {
        Self {
            tab_label: Some(label.into()),
        }
    }

    /// Create step content that is missing its tab label.
    ///
    /// Initialization reports such a step as a fatal error; this exists so
    /// hosts can forward malformed content instead of panicking on it.
    pub fn without_tab() -> Self {
        Self { tab_label: None }
    }

    /// The tab label, if the content carries one.
    pub fn tab_label(&self) -> Option<&str> {
        self.tab_label.as_deref()
    }
}

/// One page of the multi-step flow, paired with its tab label.
///
/// Exactly one step is active at any time once initialization completes,
/// unless the step list is empty. Steps are identified by their position in
/// the wizard's step list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardStep {
    label: String,
    active: bool,
}

impl WizardStep {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: false,
        }
    }

    /// The display label shown in the tab strip.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this step is the currently displayed panel.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
