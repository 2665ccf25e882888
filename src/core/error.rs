//! Transition errors.

use super::operation::Operation;
use super::state::ProcessState;
use thiserror::Error;

/// The transition table has no entry for the requested operation in the
/// current state.
///
/// Carries the attempted operation and the state at the time of the attempt.
/// The process that rejected the request is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Transition '{operation}' not allowed from state '{state}'")]
pub struct TransitionNotAllowed {
    pub operation: Operation,
    pub state: ProcessState,
}
