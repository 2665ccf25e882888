//! The transition table.
//!
//! A single pure function maps `(state, operation)` to either an [`Outcome`]
//! or [`TransitionNotAllowed`]. The match is exhaustive over both enums, so
//! adding a state or an operation forces the table to be revisited.

use super::error::TransitionNotAllowed;
use super::operation::Operation;
use super::state::ProcessState;

/// Result of a legal transition: the state to commit and its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub target: ProcessState,
    pub label: &'static str,
}

impl Outcome {
    const fn new(target: ProcessState, label: &'static str) -> Self {
        Self { target, label }
    }
}

/// Look up the transition for `operation` requested in `state`.
///
/// Deterministic and side-effect free. Every pair without an entry,
/// including everything from [`ProcessState::Terminated`], is rejected.
///
/// # Example
///
/// ```rust
/// use process_lifecycle::core::{transition, Operation, ProcessState};
///
/// let outcome = transition(ProcessState::Running, Operation::Wait).unwrap();
/// assert_eq!(outcome.target, ProcessState::Waiting);
/// assert_eq!(outcome.label, "Wait");
///
/// let err = transition(ProcessState::Ready, Operation::Wait).unwrap_err();
/// assert_eq!(err.state, ProcessState::Ready);
/// assert_eq!(err.operation, Operation::Wait);
/// ```
pub fn transition(
    state: ProcessState,
    operation: Operation,
) -> Result<Outcome, TransitionNotAllowed> {
    use Operation::*;
    use ProcessState::*;

    let outcome = match (state, operation) {
        (New, Load) => Outcome::new(Ready, "Ready"),
        (Ready, Dispatch) => Outcome::new(Running, "Running"),
        (Running, Interrupt) => Outcome::new(Ready, "Ready"),
        (Running, Wait) => Outcome::new(Waiting, "Wait"),
        (Running, Exit) => Outcome::new(Terminated, "Exit"),
        (Waiting, Complete) => Outcome::new(Ready, "Ready"),
        (New | Ready | Running | Waiting, Abort) => Outcome::new(Terminated, "Abort"),

        (New, Dispatch | Interrupt | Wait | Complete | Exit)
        | (Ready, Load | Interrupt | Wait | Complete | Exit)
        | (Running, Load | Dispatch | Complete)
        | (Waiting, Load | Dispatch | Interrupt | Wait | Exit)
        | (Terminated, _) => return Err(TransitionNotAllowed { operation, state }),
    };

    Ok(outcome)
}

/// Whether `operation` is legal in `state`.
pub fn is_allowed(state: ProcessState, operation: Operation) -> bool {
    transition(state, operation).is_ok()
}

/// Operations legal in `state`, in [`Operation::ALL`] order.
///
/// Empty exactly for final states.
pub fn allowed_operations(state: ProcessState) -> Vec<Operation> {
    Operation::ALL
        .iter()
        .copied()
        .filter(|op| is_allowed(state, *op))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    const ENTRIES: &[(ProcessState, Operation, ProcessState, &str)] = &[
        (ProcessState::New, Operation::Load, ProcessState::Ready, "Ready"),
        (ProcessState::Ready, Operation::Dispatch, ProcessState::Running, "Running"),
        (ProcessState::Running, Operation::Interrupt, ProcessState::Ready, "Ready"),
        (ProcessState::Running, Operation::Wait, ProcessState::Waiting, "Wait"),
        (ProcessState::Running, Operation::Exit, ProcessState::Terminated, "Exit"),
        (ProcessState::Waiting, Operation::Complete, ProcessState::Ready, "Ready"),
    ];

    #[test]
    fn every_entry_produces_its_target_and_label() {
        for &(from, op, to, label) in ENTRIES {
            let outcome = transition(from, op).unwrap();
            assert_eq!(outcome.target, to, "{from} --{op}-->");
            assert_eq!(outcome.label, label, "{from} --{op}-->");
        }
    }

    #[test]
    fn pairs_without_entry_are_rejected() {
        for &state in ProcessState::ALL {
            for &op in Operation::ALL {
                let listed = ENTRIES.iter().any(|&(s, o, _, _)| s == state && o == op);
                if listed || op == Operation::Abort {
                    continue;
                }

                assert_eq!(
                    transition(state, op),
                    Err(TransitionNotAllowed {
                        operation: op,
                        state
                    }),
                    "{state} --{op}--> should be rejected"
                );
            }
        }
    }

    #[test]
    fn abort_is_legal_from_every_non_final_state() {
        for &state in ProcessState::ALL {
            let result = transition(state, Operation::Abort);
            if state.is_final() {
                assert!(result.is_err());
            } else {
                assert_eq!(
                    result.unwrap(),
                    Outcome::new(ProcessState::Terminated, "Abort")
                );
            }
        }
    }

    #[test]
    fn terminated_is_absorbing() {
        assert!(allowed_operations(ProcessState::Terminated).is_empty());
    }

    #[test]
    fn allowed_operations_lists_legal_moves() {
        assert_eq!(
            allowed_operations(ProcessState::Running),
            vec![
                Operation::Interrupt,
                Operation::Wait,
                Operation::Exit,
                Operation::Abort
            ]
        );
        assert_eq!(
            allowed_operations(ProcessState::New),
            vec![Operation::Load, Operation::Abort]
        );
    }

    #[test]
    fn lookup_is_deterministic() {
        for &state in ProcessState::ALL {
            for &op in Operation::ALL {
                assert_eq!(transition(state, op), transition(state, op));
            }
        }
    }
}
