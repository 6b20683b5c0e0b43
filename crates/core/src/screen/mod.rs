//! Per-screen load state.
//!
//! Every consumer screen fetches once, then renders data or an error. This
//! module replaces ad hoc loading/error flags with one explicit state machine.
//!
//! # Modules
//!
//! - `state` - The `LoadState` machine and its phases
//! - `error` - Invalid transition errors

pub mod error;
pub mod state;

pub use error::ScreenError;
pub use state::{LoadPhase, LoadState};
