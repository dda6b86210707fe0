//! Simulation error types.
//!
//! Errors are surfaced to the caller (the training or orchestration loop)
//! rather than retried: the simulation is deterministic and side-effect-free
//! outside its own state, so a retry would fail identically.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the scheduling state machine.
#[derive(Debug, Error)]
pub enum SimError {
    /// The action index is outside the rule catalog, or the resolved rule
    /// selected a slot that cannot be scheduled (already scheduled or absent).
    ///
    /// The step that raised this left the episode state untouched.
    #[error("invalid action {action}: {reason}")]
    InvalidAction {
        /// The offending action index.
        action: usize,
        /// What went wrong during resolution.
        reason: String,
    },

    /// `step` was called after the episode had already terminated.
    ///
    /// A terminated episode is read-only until the next `reset`.
    #[error("step called on a terminated episode")]
    StepAfterTermination,

    /// The instance failed structural validation before any step ran.
    #[error("malformed instance: {}", format_errors(.errors))]
    MalformedInstance {
        /// All issues detected by validation.
        errors: Vec<ValidationError>,
    },
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
