//! What happens after a process is dispatched.

use super::context::Process;
use crate::core::TransitionNotAllowed;

/// Strategy run by [`Process::execute_with`] once the caller's action has
/// returned.
///
/// The process is `Running` when the policy is invoked. A policy may drive
/// further lifecycle operations. A rejection it returns does not undo the
/// dispatch or anything the policy committed; `execute_with` still returns
/// `Ok` and reports it in [`Dispatched::io_rejected`](super::Dispatched::io_rejected).
pub trait IoPolicy {
    fn after_dispatch(&self, process: &mut Process) -> Result<(), TransitionNotAllowed>;
}

/// Block on I/O, then complete it: `Running -> Waiting -> Ready`.
///
/// This is what [`Process::execute`] uses.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundTripIo;

impl IoPolicy for RoundTripIo {
    fn after_dispatch(&self, process: &mut Process) -> Result<(), TransitionNotAllowed> {
        process.start_io()?;
        process.end_io()?;
        Ok(())
    }
}

/// Leave the process `Running`; the caller decides when I/O happens.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeferredIo;

impl IoPolicy for DeferredIo {
    fn after_dispatch(&self, _process: &mut Process) -> Result<(), TransitionNotAllowed> {
        Ok(())
    }
}

impl<F> IoPolicy for F
where
    F: Fn(&mut Process) -> Result<(), TransitionNotAllowed>,
{
    fn after_dispatch(&self, process: &mut Process) -> Result<(), TransitionNotAllowed> {
        self(process)
    }
}
