//! Error types for the wizard core.

/// Result type alias for wizard operations.
pub type Result<T> = std::result::Result<T, WaymarkError>;

/// Errors that can occur in the wizard core.
///
/// Only initialization can fail. Malformed configuration input is ignored by
/// design, and out-of-range navigation is resolved by the step resolver, so
/// neither surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum WaymarkError {
    /// A projected step is missing its required tab label.
    #[error("step {step} has no tab label")]
    MissingTabLabel { step: usize },

    /// The step collection was already populated by a previous `initialize`.
    #[error("wizard steps have already been initialized")]
    AlreadyInitialized,
}
