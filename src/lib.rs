//! Process lifecycle: a guarded state machine for a unit of work.
//!
//! A process moves through the scheduler phases `New`, `Ready`, `Running`,
//! `Waiting` and `Terminated`. Which moves are legal is decided by a single
//! pure function, the transition table; a [`Process`] only applies the
//! table's answer, so every request either commits completely or is rejected
//! with [`TransitionNotAllowed`] and changes nothing.
//!
//! # Core Concepts
//!
//! - **State**: the closed [`ProcessState`] enum; `Terminated` is absorbing
//! - **Transition table**: [`core::transition`] maps `(state, operation)`
//!   to a target state and label
//! - **Process**: owns one current state and the history of committed moves
//! - **I/O policy**: decides what follows a dispatch in
//!   [`Process::execute_with`]
//!
//! # Example
//!
//! ```rust
//! use process_lifecycle::config::LifecycleConfig;
//! use process_lifecycle::{Process, ProcessState, TransitionNotAllowed};
//! use process_lifecycle::core::Operation;
//!
//! let mut process = Process::with_config(&LifecycleConfig::immediate());
//! process.load().unwrap();
//! process.execute(|| println!("some work")).unwrap();
//! assert_eq!(process.current_state(), ProcessState::Ready);
//!
//! let err = process.start_io().unwrap_err();
//! assert_eq!(
//!     err,
//!     TransitionNotAllowed { operation: Operation::Wait, state: ProcessState::Ready }
//! );
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod core;
pub mod driver;
pub mod process;

// Re-export commonly used types
pub use crate::core::{Operation, ProcessState, State, TransitionNotAllowed};
pub use crate::process::{Process, ProcessId};
