//! A live process: one current state, changed only through lifecycle
//! operations.

use super::io::{IoPolicy, RoundTripIo};
use crate::config::LifecycleConfig;
use crate::core::{
    transition, Operation, ProcessState, State, StateHistory, StateTransition,
    TransitionNotAllowed,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Stable identity of a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessId(Uuid);

impl ProcessId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProcessId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A committed dispatch, returned by [`Process::execute_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatched {
    /// Label of the dispatch transition.
    pub label: &'static str,
    /// Rejection raised by the I/O policy after the dispatch, if any.
    pub io_rejected: Option<TransitionNotAllowed>,
}

/// A unit of work moving through its lifecycle.
///
/// Every operation is atomic with respect to the state: it either commits
/// the table's target state (and records it in history), or returns
/// [`TransitionNotAllowed`] and leaves the process exactly as it was.
///
/// # Example
///
/// ```rust
/// use process_lifecycle::config::LifecycleConfig;
/// use process_lifecycle::core::ProcessState;
/// use process_lifecycle::process::Process;
///
/// let mut process = Process::with_config(&LifecycleConfig::immediate());
/// assert_eq!(process.load(), Ok("Ready"));
///
/// let mut ran = 0;
/// assert_eq!(process.execute(|| ran += 1), Ok("Running"));
/// assert_eq!(ran, 1);
/// assert_eq!(process.current_state(), ProcessState::Ready);
///
/// // Only a running process can block on I/O.
/// assert!(process.start_io().is_err());
/// assert_eq!(process.current_state(), ProcessState::Ready);
/// ```
#[derive(Debug)]
pub struct Process {
    id: ProcessId,
    state: ProcessState,
    history: StateHistory<ProcessState>,
    io_delay: Duration,
}

impl Default for Process {
    fn default() -> Self {
        Self::new()
    }
}

impl Process {
    /// Create a process in [`ProcessState::New`] with the default config.
    pub fn new() -> Self {
        Self::with_config(&LifecycleConfig::default())
    }

    /// Create a process in [`ProcessState::New`].
    pub fn with_config(config: &LifecycleConfig) -> Self {
        Self {
            id: ProcessId::new(),
            state: ProcessState::New,
            history: StateHistory::new(),
            io_delay: config.io_delay(),
        }
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    /// Current state (pure).
    pub fn current_state(&self) -> ProcessState {
        self.state
    }

    /// Check if the process has reached its absorbing state (pure).
    pub fn is_terminated(&self) -> bool {
        self.state.is_final()
    }

    /// Committed transitions so far (pure).
    pub fn history(&self) -> &StateHistory<ProcessState> {
        &self.history
    }

    /// Admit the process: `New -> Ready`.
    pub fn load(&mut self) -> Result<&'static str, TransitionNotAllowed> {
        self.apply(Operation::Load)
    }

    /// Dispatch the process, run `action`, then perform a simulated I/O
    /// round trip (`Running -> Waiting -> Ready`).
    ///
    /// Returns the dispatch label. If dispatch is rejected, `action` is not
    /// run.
    pub fn execute<A>(&mut self, action: A) -> Result<&'static str, TransitionNotAllowed>
    where
        A: FnOnce(),
    {
        self.execute_with(action, &RoundTripIo).map(|dispatched| dispatched.label)
    }

    /// Dispatch the process, run `action`, then hand the running process to
    /// `policy`.
    ///
    /// `Err` means the dispatch itself was rejected and nothing changed.
    /// Once the dispatch has committed the result is always `Ok`; a
    /// rejection raised by `policy` is reported in
    /// [`Dispatched::io_rejected`], and the process keeps whatever the
    /// policy committed before it.
    pub fn execute_with<A, P>(
        &mut self,
        action: A,
        policy: &P,
    ) -> Result<Dispatched, TransitionNotAllowed>
    where
        A: FnOnce(),
        P: IoPolicy + ?Sized,
    {
        let label = self.apply(Operation::Dispatch)?;
        action();

        let io_rejected = policy.after_dispatch(self).err();
        if let Some(err) = &io_rejected {
            warn!(process_id = %self.id, %err, "I/O policy rejected after dispatch");
        }

        Ok(Dispatched { label, io_rejected })
    }

    /// Block on I/O: `Running -> Waiting`, then pause for the I/O delay.
    pub fn start_io(&mut self) -> Result<&'static str, TransitionNotAllowed> {
        let label = self.apply(Operation::Wait)?;
        self.simulate_io();
        Ok(label)
    }

    /// Finish I/O: `Waiting -> Ready`, then pause for the I/O delay.
    pub fn end_io(&mut self) -> Result<&'static str, TransitionNotAllowed> {
        let label = self.apply(Operation::Complete)?;
        self.simulate_io();
        Ok(label)
    }

    /// Preempt the process: `Running -> Ready`.
    pub fn interrupt(&mut self) -> Result<&'static str, TransitionNotAllowed> {
        self.apply(Operation::Interrupt)
    }

    /// Normal exit: `Running -> Terminated`.
    pub fn exit(&mut self) -> Result<&'static str, TransitionNotAllowed> {
        self.apply(Operation::Exit)
    }

    /// Cancel from any non-terminal state.
    pub fn abort(&mut self) -> Result<&'static str, TransitionNotAllowed> {
        self.apply(Operation::Abort)
    }

    /// Request `operation` directly.
    ///
    /// Unlike [`start_io`](Self::start_io) and [`end_io`](Self::end_io) this
    /// never pauses.
    pub fn request(&mut self, operation: Operation) -> Result<&'static str, TransitionNotAllowed> {
        self.apply(operation)
    }

    fn apply(&mut self, operation: Operation) -> Result<&'static str, TransitionNotAllowed> {
        let from = self.state;
        let outcome = transition(from, operation).inspect_err(|err| {
            warn!(process_id = %self.id, %err, "Rejected lifecycle operation");
        })?;

        self.state = outcome.target;
        self.history.push(StateTransition {
            from,
            to: outcome.target,
            operation,
            label: outcome.label.to_string(),
            timestamp: Utc::now(),
        });

        debug!(
            process_id = %self.id,
            %operation,
            from = %from,
            to = %outcome.target,
            "Committed lifecycle transition"
        );

        Ok(outcome.label)
    }

    fn simulate_io(&self) {
        if !self.io_delay.is_zero() {
            std::thread::sleep(self.io_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::DeferredIo;
    use std::cell::Cell;

    fn process() -> Process {
        Process::with_config(&LifecycleConfig::immediate())
    }

    #[test]
    fn new_process_starts_in_new() {
        let process = process();
        assert_eq!(process.current_state(), ProcessState::New);
        assert!(process.history().is_empty());
        assert!(!process.is_terminated());
    }

    #[test]
    fn load_commits_ready() {
        let mut process = process();
        assert_eq!(process.load(), Ok("Ready"));
        assert_eq!(process.current_state(), ProcessState::Ready);
    }

    #[test]
    fn execute_runs_action_once_and_returns_to_ready() {
        let mut process = process();
        process.load().unwrap();

        let calls = Cell::new(0);
        let label = process.execute(|| calls.set(calls.get() + 1)).unwrap();

        assert_eq!(label, "Running");
        assert_eq!(calls.get(), 1);
        assert_eq!(process.current_state(), ProcessState::Ready);
        assert_eq!(
            process.history().get_path(),
            vec![
                &ProcessState::New,
                &ProcessState::Ready,
                &ProcessState::Running,
                &ProcessState::Waiting,
                &ProcessState::Ready,
            ]
        );
    }

    #[test]
    fn rejected_dispatch_skips_action() {
        let mut process = process();

        let calls = Cell::new(0);
        let err = process.execute(|| calls.set(calls.get() + 1)).unwrap_err();

        assert_eq!(
            err,
            TransitionNotAllowed {
                operation: Operation::Dispatch,
                state: ProcessState::New,
            }
        );
        assert_eq!(calls.get(), 0);
        assert_eq!(process.current_state(), ProcessState::New);
    }

    #[test]
    fn failing_policy_does_not_report_dispatch_as_rejected() {
        let mut process = process();
        process.load().unwrap();

        let calls = Cell::new(0);
        let complete_without_waiting = |p: &mut Process| p.end_io().map(|_| ());
        let dispatched = process
            .execute_with(|| calls.set(calls.get() + 1), &complete_without_waiting)
            .unwrap();

        assert_eq!(dispatched.label, "Running");
        assert_eq!(
            dispatched.io_rejected,
            Some(TransitionNotAllowed {
                operation: Operation::Complete,
                state: ProcessState::Running,
            })
        );
        assert_eq!(calls.get(), 1);
        assert_eq!(process.current_state(), ProcessState::Running);
        assert_eq!(process.history().len(), 2);
    }

    #[test]
    fn rejection_leaves_state_and_history_untouched() {
        let mut process = process();
        process.load().unwrap();
        let before = process.history().len();

        assert!(process.start_io().is_err());
        assert!(process.end_io().is_err());
        assert!(process.exit().is_err());

        assert_eq!(process.current_state(), ProcessState::Ready);
        assert_eq!(process.history().len(), before);
    }

    #[test]
    fn interrupt_preempts_running_process() {
        let mut process = process();
        process.load().unwrap();
        process.execute_with(|| {}, &DeferredIo).unwrap();

        assert_eq!(process.interrupt(), Ok("Ready"));
        assert_eq!(process.current_state(), ProcessState::Ready);
    }

    #[test]
    fn deferred_io_lets_caller_drive_wait_and_complete() {
        let mut process = process();
        process.load().unwrap();
        process.execute_with(|| {}, &DeferredIo).unwrap();

        assert_eq!(process.start_io(), Ok("Wait"));
        assert_eq!(process.current_state(), ProcessState::Waiting);
        assert_eq!(process.end_io(), Ok("Ready"));
        assert_eq!(process.current_state(), ProcessState::Ready);
    }

    #[test]
    fn exit_terminates_and_is_absorbing() {
        let mut process = process();
        process.load().unwrap();
        process.execute_with(|| {}, &DeferredIo).unwrap();
        assert_eq!(process.exit(), Ok("Exit"));
        assert!(process.is_terminated());

        for &op in Operation::ALL {
            assert!(process.request(op).is_err());
            assert_eq!(process.current_state(), ProcessState::Terminated);
        }
    }

    #[test]
    fn abort_cancels_waiting_process() {
        let mut process = process();
        process.load().unwrap();
        process.execute_with(|| {}, &DeferredIo).unwrap();
        process.start_io().unwrap();

        assert_eq!(process.abort(), Ok("Abort"));
        assert_eq!(process.current_state(), ProcessState::Terminated);
    }

    #[test]
    fn history_records_operation_and_label() {
        let mut process = process();
        process.load().unwrap();

        let record = &process.history().transitions()[0];
        assert_eq!(record.from, ProcessState::New);
        assert_eq!(record.to, ProcessState::Ready);
        assert_eq!(record.operation, Operation::Load);
        assert_eq!(record.label, "Ready");
    }

    #[test]
    fn identity_is_stable_and_unique() {
        let mut a = process();
        let b = process();
        let id = a.id();

        a.load().unwrap();
        assert_eq!(a.id(), id);
        assert_ne!(a.id(), b.id());
    }
}
