//! Load state machine.
//!
//! The valid transitions are:
//! - Idle → Loading (start)
//! - Loaded → Loading (refresh)
//! - Failed → Loading (retry)
//! - Loading → Loaded | Failed (finish)
//! - any → Idle (reset)

use std::fmt;

use crate::screen::error::ScreenError;

/// Phase of a `LoadState`, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// Data arrived.
    Loaded,
    /// The request failed.
    Failed,
}

impl LoadPhase {
    /// Returns the string representation of the phase.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load state of one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// Data arrived.
    Loaded(T),
    /// The request failed with this message.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        match self {
            Self::Idle => LoadPhase::Idle,
            Self::Loading => LoadPhase::Loading,
            Self::Loaded(_) => LoadPhase::Loaded,
            Self::Failed(_) => LoadPhase::Failed,
        }
    }

    /// Marks a request as in flight.
    ///
    /// Any previously loaded data or error is dropped.
    pub fn start(&mut self) -> Result<(), ScreenError> {
        if matches!(self, Self::Loading) {
            return Err(ScreenError::InvalidTransition {
                from: LoadPhase::Loading,
                to: LoadPhase::Loading,
            });
        }
        *self = Self::Loading;
        Ok(())
    }

    /// Records the outcome of the in-flight request.
    pub fn finish<E: fmt::Display>(&mut self, outcome: Result<T, E>) -> Result<(), ScreenError> {
        let target = if outcome.is_ok() {
            LoadPhase::Loaded
        } else {
            LoadPhase::Failed
        };
        if !matches!(self, Self::Loading) {
            return Err(ScreenError::InvalidTransition {
                from: self.phase(),
                to: target,
            });
        }
        *self = match outcome {
            Ok(data) => Self::Loaded(data),
            Err(err) => Self::Failed(err.to_string()),
        };
        Ok(())
    }

    /// Returns to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// True while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the loaded data.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the loaded data mutably, e.g. to apply a local update.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
