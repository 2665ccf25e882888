//! Lifecycle states.
//!
//! The [`State`] trait describes what the rest of the crate needs from a
//! state value; [`ProcessState`] is the closed set of phases a process moves
//! through.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are plain values describing the current
/// position in a lifecycle; they never point back at their owner.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: states are compared by the transition table and in tests
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `DeserializeOwned`: history records are serializable
pub trait State: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// The state's name for display and logging.
    fn name(&self) -> &'static str;

    /// Check if this is a final (absorbing) state.
    ///
    /// No operation is legal from a final state. Default implementation
    /// returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Phase of a process in its lifecycle.
    ///
    /// A process starts in [`ProcessState::New`]; [`ProcessState::Terminated`]
    /// is absorbing.
    ///
    /// ```
    /// use process_lifecycle::core::{ProcessState, State};
    ///
    /// assert_eq!(ProcessState::Waiting.name(), "Waiting");
    /// assert!(ProcessState::Terminated.is_final());
    /// assert!(!ProcessState::Running.is_final());
    /// ```
    #[derive(Copy, Eq, Hash, Default)]
    pub enum ProcessState {
        /// Created but not yet admitted.
        #[default]
        New,
        /// Admitted and waiting to be dispatched.
        Ready,
        /// Currently executing.
        Running,
        /// Blocked on (simulated) I/O.
        Waiting,
        /// Finished; no further operation is legal.
        Terminated,
    }
    final: [Terminated]
}
