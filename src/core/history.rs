//! In-memory history of committed transitions.
//!
//! History is immutable: [`StateHistory::record`] returns a new history with
//! the transition appended. It is never written anywhere by this crate.

use super::operation::Operation;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use process_lifecycle::core::{Operation, ProcessState, StateTransition};
///
/// let transition = StateTransition {
///     from: ProcessState::New,
///     to: ProcessState::Ready,
///     operation: Operation::Load,
///     label: "Ready".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.operation, Operation::Load);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The operation that caused the transition
    pub operation: Operation,
    /// Label returned to the caller
    pub label: String,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// Rejected requests never appear here.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// Does not mutate `self`. This copies every existing record; an owner
    /// that appends on each commit should use [`push`](Self::push).
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// The path of states traversed: the first `from`, then every `to`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::Utc;
    /// use process_lifecycle::core::{Operation, ProcessState, StateHistory, StateTransition};
    ///
    /// let history = StateHistory::new()
    ///     .record(StateTransition {
    ///         from: ProcessState::New,
    ///         to: ProcessState::Ready,
    ///         operation: Operation::Load,
    ///         label: "Ready".to_string(),
    ///         timestamp: Utc::now(),
    ///     })
    ///     .record(StateTransition {
    ///         from: ProcessState::Ready,
    ///         to: ProcessState::Running,
    ///         operation: Operation::Dispatch,
    ///         label: "Running".to_string(),
    ///         timestamp: Utc::now(),
    ///     });
    ///
    /// assert_eq!(
    ///     history.get_path(),
    ///     vec![&ProcessState::New, &ProcessState::Ready, &ProcessState::Running]
    /// );
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
