//! Toast provider and stack for the landing page.
//!
//! [`ToastProvider`] owns one [`ToastCenter`] for the lifetime of the page and
//! hands out a [`Toasts`] capability through context. Components inside the
//! provider call [`use_toasts`]; there is no other way to reach the queue.

use crate::sections::{ICON_ALERT_CIRCLE, ICON_CHECK_CIRCLE, ICON_INFO, ICON_X, Icon};
use leptos::prelude::*;
use scrapeai_toast::{Scheduler, Task, Toast, ToastCenter, ToastError, ToastId, ToastKind};
use std::time::Duration;

/// `setTimeout`-backed scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Result<TimeoutHandle, ToastError> {
        set_timeout_with_handle(task, delay).map_err(|err| ToastError::Schedule(format!("{err:?}")))
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// A canned toast: kind plus static copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub title: &'static str,
    pub message: &'static str,
}

/// Handle to the page's toast queue. Copy it freely into event handlers.
#[derive(Clone, Copy)]
pub struct Toasts {
    center: StoredValue<ToastCenter<BrowserScheduler>, LocalStorage>,
    list: RwSignal<Vec<Toast>>,
}

impl Toasts {
    pub fn notify(self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) {
        let (title, message) = (title.into(), message.into());
        self.center.try_with_value(|center| center.notify(kind, title, message));
    }

    pub fn show(self, toast: ToastMessage) {
        self.notify(toast.kind, toast.title, toast.message);
    }

    pub fn success(self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(ToastKind::Success, title, message);
    }

    pub fn dismiss(self, id: ToastId) {
        self.center.try_with_value(|center| center.dismiss(id));
    }

    /// Active toasts, oldest first (reactive).
    pub fn list(self) -> Vec<Toast> {
        self.list.get()
    }
}

/// Access the toast queue of the enclosing [`ToastProvider`].
///
/// # Panics
///
/// When called outside a `<ToastProvider>` subtree.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("use_toasts() must be called inside <ToastProvider>")
}

/// Creates the toast queue on mount, tears it down (cancelling every pending
/// timer) on unmount, and renders the stack above its children.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let list = RwSignal::new(Vec::<Toast>::new());
    let center = ToastCenter::new(BrowserScheduler);
    // the signal may already be disposed when shutdown runs during unmount
    center.set_listener(move |toasts| {
        let _ = list.try_set(toasts.to_vec());
    });

    let toasts = Toasts {
        center: StoredValue::new_local(center),
        list,
    };
    provide_context(toasts);

    on_cleanup(move || {
        toasts.center.try_with_value(|center| center.shutdown());
    });

    view! {
        {children()}
        <ToastStack />
    }
}

fn kind_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => ICON_CHECK_CIRCLE,
        ToastKind::Info => ICON_INFO,
        ToastKind::Warning => ICON_ALERT_CIRCLE,
    }
}

#[component]
fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.list()
                key=|toast| toast.id.get()
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast toast-{}", toast.kind);
                    view! {
                        <div class=class>
                            <div class="toast-icon">
                                <Icon path=kind_icon(toast.kind) />
                            </div>
                            <div class="toast-body">
                                <p class="toast-title">{toast.title}</p>
                                <p class="toast-message">{toast.message}</p>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss notification"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                <Icon path=ICON_X size="16" />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
