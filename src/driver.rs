//! Drives a process through a short lifecycle.
//!
//! The run admits the process, executes one unit of work (with the I/O
//! round trip), and then deliberately asks a `Ready` process to block on
//! I/O. That request is rejected; the rejection is reported, not fatal.

use crate::core::{ProcessState, TransitionNotAllowed};
use crate::process::Process;
use tracing::info;

/// What happened during [`run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Labels of the committed steps, in order (`load`, then `execute`).
    pub labels: Vec<&'static str>,
    /// The intentionally illegal request's rejection, if it was rejected.
    pub rejected: Option<TransitionNotAllowed>,
    pub final_state: ProcessState,
}

/// Run the demonstration lifecycle on `process`.
///
/// Errors from `load` or `execute` are returned; the final `start_io`
/// request is expected to fail and is captured in the report.
///
/// ```rust
/// use process_lifecycle::config::LifecycleConfig;
/// use process_lifecycle::core::{Operation, ProcessState};
/// use process_lifecycle::driver;
/// use process_lifecycle::process::Process;
///
/// let mut process = Process::with_config(&LifecycleConfig::immediate());
/// let report = driver::run(&mut process, || {}).unwrap();
///
/// assert_eq!(report.labels, vec!["Ready", "Running"]);
/// assert_eq!(report.rejected.map(|e| e.operation), Some(Operation::Wait));
/// assert_eq!(report.final_state, ProcessState::Ready);
/// ```
pub fn run<A>(process: &mut Process, action: A) -> Result<RunReport, TransitionNotAllowed>
where
    A: FnOnce(),
{
    let mut labels = Vec::with_capacity(2);

    info!(process_id = %process.id(), "Do some work");
    labels.push(process.load()?);
    info!(process_id = %process.id(), "Loaded new process");

    labels.push(process.execute(|| {
        info!("Started processing new task (scheduler dispatch)");
        action();
    })?);
    info!(process_id = %process.id(), "Ended I/O");

    info!("Verifying a ready process cannot block on I/O");
    let rejected = match process.start_io() {
        Ok(label) => {
            labels.push(label);
            None
        }
        Err(err) => {
            info!(%err, "Rejected as expected");
            Some(err)
        }
    };

    Ok(RunReport {
        labels,
        rejected,
        final_state: process.current_state(),
    })
}
