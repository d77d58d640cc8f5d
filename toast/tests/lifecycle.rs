use pretty_assertions::assert_eq;
use scrapeai_toast::{
    ManualHandle, ManualScheduler, Scheduler, Task, ToastCenter, ToastError, ToastKind,
};
use std::time::Duration;

fn setup() -> (ToastCenter<ManualScheduler>, ManualScheduler) {
    let clock = ManualScheduler::new();
    (ToastCenter::new(clock.clone()), clock)
}

#[test]
fn welcome_toast_round_trip() {
    let (toasts, _clock) = setup();

    let id = toasts.notify(ToastKind::Success, "Welcome", "Plan activated");

    let active = toasts.toasts();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, id);
    assert_eq!(active[0].kind, ToastKind::Success);
    assert_eq!(active[0].title, "Welcome");
    assert_eq!(active[0].message, "Plan activated");

    toasts.dismiss(id);
    assert_eq!(toasts.len(), 0);
}

#[test]
fn sequential_toasts_get_distinct_ids_in_order() {
    let (toasts, _clock) = setup();

    let first = toasts.info("First", "one");
    let second = toasts.warning("Second", "two");

    assert_ne!(first, second);
    let ids: Vec<_> = toasts.toasts().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn count_returns_to_baseline_after_expiry() {
    let (toasts, clock) = setup();
    // no timer for this one, so it sits under the new toast the whole time
    clock.set_refusing(true);
    toasts.warning("Existing", "already here");
    clock.set_refusing(false);
    clock.advance(Duration::from_secs(2));
    let baseline = toasts.len();

    toasts.success("New", "fresh");
    assert_eq!(toasts.len(), baseline + 1);

    clock.advance(Duration::from_secs(5));
    assert_eq!(toasts.len(), baseline);
}

#[test]
fn staggered_toasts_expire_independently() {
    let (toasts, clock) = setup();
    toasts.info("A", "a");
    clock.advance(Duration::from_secs(3));
    let b = toasts.info("B", "b");

    clock.advance(Duration::from_secs(2));
    let remaining: Vec<_> = toasts.toasts().iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![b]);

    clock.advance(Duration::from_secs(3));
    assert!(toasts.is_empty());
}

#[test]
fn dismissal_removes_only_target_regardless_of_timers() {
    let (toasts, clock) = setup();
    let a = toasts.info("A", "a");
    let b = toasts.info("B", "b");
    let c = toasts.info("C", "c");

    clock.advance(Duration::from_secs(4));
    toasts.dismiss(b);

    let ids: Vec<_> = toasts.toasts().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a, c]);
    assert_eq!(clock.pending(), 2);
}

#[test]
fn dismissing_expired_toast_is_noop() {
    let (toasts, clock) = setup();
    let id = toasts.info("Gone", "soon");
    clock.advance(Duration::from_secs(5));
    toasts.info("Fresh", "still here");

    let before = toasts.len();
    assert!(!toasts.dismiss(id));
    assert_eq!(toasts.len(), before);
}

#[test]
fn late_timer_after_shutdown_is_harmless() {
    let (toasts, clock) = setup();
    toasts.info("A", "a");
    toasts.shutdown();

    clock.advance(Duration::from_secs(10));
    assert!(toasts.is_empty());

    // the center stays usable after teardown
    toasts.info("B", "b");
    assert_eq!(toasts.len(), 1);
}

/// Virtual clock that ignores cancellation, so every armed timer fires.
#[derive(Clone, Default)]
struct UncancellableClock(ManualScheduler);

impl Scheduler for UncancellableClock {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Result<ManualHandle, ToastError> {
        self.0.schedule(delay, task)
    }

    fn cancel(&self, _handle: ManualHandle) {}
}

fn leaky_setup() -> (ToastCenter<UncancellableClock>, ManualScheduler) {
    let clock = UncancellableClock::default();
    (ToastCenter::new(clock.clone()), clock.0)
}

#[test]
fn timer_firing_after_dismissal_leaves_others_alone() {
    let (toasts, clock) = leaky_setup();
    let a = toasts.info("A", "a");
    let b = toasts.info("B", "b");
    assert!(toasts.dismiss(a));

    clock.advance(Duration::from_secs(1));
    let c = toasts.info("C", "c");
    // A's stale timer and B's real one both fire at t=5s
    clock.advance(Duration::from_secs(4));

    let ids: Vec<_> = toasts.toasts().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![c]);
    assert!(toasts.get(b).is_none());
    assert_eq!(clock.pending(), 1);
}

#[test]
fn timer_firing_after_shutdown_leaves_new_toasts_alone() {
    let (toasts, clock) = leaky_setup();
    toasts.info("A", "a");
    toasts.shutdown();
    assert_eq!(toasts.pending_timers(), 0);

    clock.advance(Duration::from_secs(1));
    let b = toasts.info("B", "b");
    // A's timer is still queued on the clock and fires at t=5s
    clock.advance(Duration::from_secs(4));

    let ids: Vec<_> = toasts.toasts().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![b]);

    clock.advance(Duration::from_secs(1));
    assert!(toasts.is_empty());
}

#[test]
fn timer_firing_after_center_dropped_does_nothing() {
    let (toasts, clock) = leaky_setup();
    let seen = std::rc::Rc::new(std::cell::Cell::new(0));
    let sink = seen.clone();
    toasts.set_listener(move |_| sink.set(sink.get() + 1));
    toasts.info("A", "a");
    toasts.info("B", "b");
    assert_eq!(seen.get(), 2);

    drop(toasts);
    assert_eq!(clock.pending(), 2);

    clock.advance(Duration::from_secs(10));
    assert_eq!(clock.pending(), 0);
    assert_eq!(seen.get(), 2);
}
