//! Toast lifecycle: queue, expiry timers and change notification.

use crate::config::ToastConfig;
use crate::queue::ToastQueue;
use crate::scheduler::{Scheduler, Task};
use crate::types::{Toast, ToastId, ToastKind};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};

type Listener = Rc<dyn Fn(&[Toast])>;

struct Inner<S: Scheduler> {
    queue: ToastQueue,
    timers: HashMap<ToastId, S::Handle>,
    scheduler: S,
    config: ToastConfig,
    listener: Option<Listener>,
}

impl<S: Scheduler> Inner<S> {
    fn cancel_all(&mut self) -> usize {
        let handles: Vec<_> = self.timers.drain().map(|(_, handle)| handle).collect();
        let count = handles.len();
        for handle in handles {
            self.scheduler.cancel(handle);
        }
        count
    }
}

impl<S: Scheduler> Drop for Inner<S> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Owner of the active toasts for one page.
///
/// Every toast gets its own expiry timer, bound to its id. Dismissing a toast
/// cancels that timer; [`ToastCenter::shutdown`] (or dropping the last clone)
/// cancels all of them. Timers only hold a weak reference back to the center,
/// so one that fires late finds nothing to do.
///
/// Cloning is cheap and every clone drives the same queue.
pub struct ToastCenter<S: Scheduler> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: Scheduler> Clone for ToastCenter<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Scheduler + 'static> ToastCenter<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_config(scheduler, ToastConfig::default())
    }

    pub fn with_config(scheduler: S, config: ToastConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                queue: ToastQueue::new(),
                timers: HashMap::new(),
                scheduler,
                config,
                listener: None,
            })),
        }
    }

    /// Register the callback invoked with the full list after every change.
    /// Replaces any previous listener.
    pub fn set_listener(&self, listener: impl Fn(&[Toast]) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    /// Enqueue a toast and arm its expiry timer.
    pub fn notify(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> ToastId {
        let id = self.inner.borrow_mut().queue.push(kind, title, message);
        debug!(%id, %kind, "toast queued");
        self.arm_expiry(id);
        self.emit();
        id
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) -> ToastId {
        self.notify(ToastKind::Success, title, message)
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) -> ToastId {
        self.notify(ToastKind::Info, title, message)
    }

    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) -> ToastId {
        self.notify(ToastKind::Warning, title, message)
    }

    /// Close a toast early. Returns whether it was still on screen.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            if let Some(handle) = inner.timers.remove(&id) {
                inner.scheduler.cancel(handle);
            }
            inner.queue.remove(id).is_some()
        };
        if removed {
            debug!(%id, "toast dismissed");
            self.emit();
        }
        removed
    }

    /// Cancel every pending timer and clear the queue.
    pub fn shutdown(&self) {
        let (cancelled, had_toasts) = {
            let mut inner = self.inner.borrow_mut();
            let cancelled = inner.cancel_all();
            let had_toasts = !inner.queue.is_empty();
            inner.queue.clear();
            (cancelled, had_toasts)
        };
        debug!(cancelled, "toast center shut down");
        if had_toasts {
            self.emit();
        }
    }

    /// Snapshot of the active toasts, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.borrow().queue.as_slice().to_vec()
    }

    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.inner.borrow().queue.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().queue.is_empty()
    }

    /// Number of expiry timers still armed.
    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    fn arm_expiry(&self, id: ToastId) {
        let weak: Weak<RefCell<Inner<S>>> = Rc::downgrade(&self.inner);
        let task: Task = Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                ToastCenter { inner }.expire(id);
            }
        });

        let scheduled = {
            let inner = self.inner.borrow();
            inner.scheduler.schedule(inner.config.lifetime, task)
        };
        match scheduled {
            Ok(handle) => {
                self.inner.borrow_mut().timers.insert(id, handle);
            }
            Err(err) => warn!(%id, error = %err, "toast stays until dismissed"),
        }
    }

    fn expire(&self, id: ToastId) {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            inner.timers.remove(&id);
            inner.queue.remove(id).is_some()
        };
        if removed {
            debug!(%id, "toast expired");
            self.emit();
        }
    }

    fn emit(&self) {
        let (listener, snapshot) = {
            let inner = self.inner.borrow();
            match &inner.listener {
                Some(listener) => (Rc::clone(listener), inner.queue.as_slice().to_vec()),
                None => return,
            }
        };
        listener(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::time::Duration;

    fn center() -> (ToastCenter<ManualScheduler>, ManualScheduler) {
        let clock = ManualScheduler::new();
        (ToastCenter::new(clock.clone()), clock)
    }

    #[test]
    fn notify_adds_one_entry_with_given_fields() {
        let (toasts, _clock) = center();
        let id = toasts.notify(ToastKind::Warning, "Quota", "Almost out of pages");

        assert_eq!(toasts.len(), 1);
        assert_eq!(
            toasts.get(id),
            Some(Toast {
                id,
                kind: ToastKind::Warning,
                title: "Quota".into(),
                message: "Almost out of pages".into(),
            })
        );
        assert_eq!(toasts.pending_timers(), 1);
    }

    #[test]
    fn expires_after_lifetime_not_before() {
        let (toasts, clock) = center();
        toasts.info("Hello", "world");

        clock.advance(Duration::from_millis(4_999));
        assert_eq!(toasts.len(), 1);

        clock.advance(Duration::from_millis(1));
        assert!(toasts.is_empty());
        assert_eq!(toasts.pending_timers(), 0);
    }

    #[test]
    fn custom_lifetime_is_honoured() {
        let clock = ManualScheduler::new();
        let toasts = ToastCenter::with_config(
            clock.clone(),
            ToastConfig::with_lifetime(Duration::from_secs(1)),
        );
        toasts.success("Fast", "gone soon");

        clock.advance(Duration::from_secs(1));
        assert!(toasts.is_empty());
    }

    #[test]
    fn dismiss_cancels_timer() {
        let (toasts, clock) = center();
        let id = toasts.success("Saved", "ok");

        assert!(toasts.dismiss(id));
        assert_eq!(clock.pending(), 0);
        assert_eq!(toasts.pending_timers(), 0);
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let (toasts, _clock) = center();
        let id = toasts.success("Saved", "ok");
        toasts.success("Other", "still here");
        toasts.dismiss(id);

        assert!(!toasts.dismiss(id));
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn listener_sees_every_change() {
        let (toasts, clock) = center();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        toasts.set_listener(move |list| sink.borrow_mut().push(list.len()));

        let a = toasts.info("A", "a");
        toasts.info("B", "b");
        toasts.dismiss(a);
        clock.advance(Duration::from_secs(5));

        assert_eq!(*calls.borrow(), vec![1, 2, 1, 0]);
    }

    #[test]
    fn listener_not_called_for_noop_dismiss() {
        let (toasts, _clock) = center();
        let calls = Rc::new(Cell::new(0));
        let sink = calls.clone();
        let id = toasts.info("A", "a");
        toasts.dismiss(id);

        toasts.set_listener(move |_| sink.set(sink.get() + 1));
        toasts.dismiss(id);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn listener_may_read_center() {
        let (toasts, _clock) = center();
        let seen = Rc::new(Cell::new(0));
        let sink = seen.clone();
        let reader = toasts.clone();
        toasts.set_listener(move |_| sink.set(reader.len()));

        toasts.info("A", "a");
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn schedule_failure_keeps_toast_dismissable() {
        let (toasts, clock) = center();
        clock.set_refusing(true);

        let id = toasts.warning("Sticky", "no timer");
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.pending_timers(), 0);

        clock.advance(Duration::from_secs(60));
        assert_eq!(toasts.len(), 1);

        assert!(toasts.dismiss(id));
        assert!(toasts.is_empty());
    }

    #[test]
    fn shutdown_cancels_everything() {
        let (toasts, clock) = center();
        toasts.info("A", "a");
        toasts.info("B", "b");

        toasts.shutdown();
        assert!(toasts.is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn dropping_center_cancels_timers() {
        let (toasts, clock) = center();
        toasts.info("A", "a");
        assert_eq!(clock.pending(), 1);

        drop(toasts);
        assert_eq!(clock.pending(), 0);
    }
}
