//! Screen state error types.

use thiserror::Error;

use crate::screen::state::LoadPhase;

/// Errors raised by `LoadState` transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// Attempted a transition the current phase does not allow.
    #[error("Invalid load transition from {from} to {to}")]
    InvalidTransition {
        /// The current phase.
        from: LoadPhase,
        /// The attempted target phase.
        to: LoadPhase,
    },
}
