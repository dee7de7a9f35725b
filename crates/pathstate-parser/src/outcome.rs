//! The result of resolving a location path.

use pathstate_core::state::NavigationState;

use crate::error::Diagnostic;

/// A navigation state together with the structural error that stopped
/// parsing, if any.
///
/// On error, `state` holds every field committed before the failing section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateOutcome {
    state: NavigationState,
    error: Option<Diagnostic>,
}

impl StateOutcome {
    pub(crate) fn new(state: NavigationState, error: Option<Diagnostic>) -> Self {
        Self { state, error }
    }

    /// Returns the (possibly partial) navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Returns the structural error, if any.
    pub fn error(&self) -> Option<&Diagnostic> {
        self.error.as_ref()
    }

    /// Returns the contract error message, e.g. `invalid user path.`.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(Diagnostic::message)
    }

    /// Returns `true` when the path parsed without error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Splits the outcome into its state and error.
    pub fn into_parts(self) -> (NavigationState, Option<Diagnostic>) {
        (self.state, self.error)
    }

    /// Converts to a `Result`, discarding the partial state on error.
    pub fn into_result(self) -> Result<NavigationState, Diagnostic> {
        match self.error {
            Some(diagnostic) => Err(diagnostic),
            None => Ok(self.state),
        }
    }
}
