//! Pure lifecycle core.
//!
//! This module contains everything that decides *whether* a transition may
//! happen, with no side effects:
//! - States via the `State` trait and the `ProcessState` enum
//! - The closed set of lifecycle `Operation`s
//! - The transition table, the single authority on legality
//! - Immutable history records
//!
//! Applying a transition to a live process is the job of
//! [`crate::process`].

mod error;
mod history;
mod operation;
mod state;
mod table;

pub use error::TransitionNotAllowed;
pub use history::{StateHistory, StateTransition};
pub use operation::Operation;
pub use state::{ProcessState, State};
pub use table::{allowed_operations, is_allowed, transition, Outcome};
