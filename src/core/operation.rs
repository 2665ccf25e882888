//! Lifecycle operations a caller can request on a process.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A requested lifecycle operation.
///
/// Operations are only requests: whether one is legal depends on the
/// current state, as decided by [`transition`](crate::core::transition).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Admit a new process (`New -> Ready`).
    Load,
    /// Hand the CPU to a ready process (`Ready -> Running`).
    Dispatch,
    /// Preempt a running process (`Running -> Ready`).
    Interrupt,
    /// Block on I/O (`Running -> Waiting`).
    Wait,
    /// I/O finished (`Waiting -> Ready`).
    Complete,
    /// Normal exit (`Running -> Terminated`).
    Exit,
    /// Cancel from any non-terminal state.
    Abort,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Operation] = &[
        Operation::Load,
        Operation::Dispatch,
        Operation::Interrupt,
        Operation::Wait,
        Operation::Complete,
        Operation::Exit,
        Operation::Abort,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Dispatch => "dispatch",
            Self::Interrupt => "interrupt",
            Self::Wait => "wait",
            Self::Complete => "complete",
            Self::Exit => "exit",
            Self::Abort => "abort",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_lowercase_and_unique() {
        let mut names: Vec<_> = Operation::ALL.iter().map(Operation::name).collect();
        assert!(names.iter().all(|n| n.chars().all(|c| c.is_ascii_lowercase())));

        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Operation::ALL.len());
    }

    #[test]
    fn serde_name_matches_display() {
        for op in Operation::ALL {
            let json = serde_json::to_string(op).unwrap();
            assert_eq!(json, format!("\"{op}\""));
        }
    }
}
