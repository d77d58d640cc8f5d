//! Timer seam for toast expiry.
//!
//! [`crate::ToastCenter`] never talks to a clock directly. The browser build
//! hands it a `setTimeout` backed scheduler; tests use [`ManualScheduler`],
//! which only moves forward when told to.

use crate::error::ToastError;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// Deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Something that can run a task later and forget it on request.
///
/// Implementations must not run the task synchronously from inside
/// [`Scheduler::schedule`].
pub trait Scheduler {
    /// Token identifying one scheduled task.
    type Handle;

    /// Run `task` once `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Task) -> Result<Self::Handle, ToastError>;

    /// Forget a scheduled task. Cancelling a task that already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Key of a task scheduled on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ManualHandle {
    deadline: Duration,
    seq: u64,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    seq: u64,
    pending: BTreeMap<ManualHandle, Task>,
}

/// Deterministic virtual clock.
///
/// Clones share the same timeline, so a test can keep one handle and give
/// another to the code under test.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
    refuse: Rc<Cell<bool>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `schedule` calls fail (or succeed again).
    pub fn set_refusing(&self, refuse: bool) {
        self.refuse.set(refuse);
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Move the clock forward by `by`, running every task that falls due,
    /// earliest deadline first. Tasks may schedule or cancel other tasks.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let due = {
                let mut state = self.state.borrow_mut();
                let next = state
                    .pending
                    .first_key_value()
                    .map(|(handle, _)| handle.deadline)
                    .filter(|deadline| *deadline <= target);
                match next {
                    Some(deadline) => {
                        state.now = deadline;
                        state.pending.pop_first().map(|(_, task)| task)
                    }
                    None => None,
                }
            };
            match due {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Result<ManualHandle, ToastError> {
        if self.refuse.get() {
            return Err(ToastError::Schedule("manual scheduler is refusing tasks".into()));
        }
        let mut state = self.state.borrow_mut();
        let handle = ManualHandle {
            deadline: state.now + delay,
            seq: state.seq,
        };
        state.seq += 1;
        state.pending.insert(handle, task);
        Ok(handle)
    }

    fn cancel(&self, handle: ManualHandle) {
        self.state.borrow_mut().pending.remove(&handle);
    }
}
