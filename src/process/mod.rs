//! The imperative shell around the pure core.
//!
//! A [`Process`] owns a current [`ProcessState`](crate::core::ProcessState)
//! and applies the transition table's results to it. Side effects live here:
//! running the caller's action, the simulated I/O pauses, logging.
//!
//! What follows a dispatch is an [`IoPolicy`]. [`Process::execute`] uses
//! [`RoundTripIo`]; [`Process::execute_with`] accepts any policy, including a
//! closure.

mod context;
mod io;

pub use context::{Dispatched, Process, ProcessId};
pub use io::{DeferredIo, IoPolicy, RoundTripIo};
