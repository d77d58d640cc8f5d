//! Browser tests: `wasm-pack test --headless --firefox landing`
#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use scrapeai_landing::App;
use scrapeai_landing::toast::{ToastProvider, Toasts, use_toasts};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root() -> web_sys::HtmlElement {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    doc.body().unwrap().append_child(&root).unwrap();
    root.unchecked_into()
}

#[component]
fn RaiseWelcome() -> impl IntoView {
    use_toasts().success("Welcome", "Plan activated");
}

/// Raises a toast and hands the capability back to the test.
#[component]
fn Capture(slot: Rc<Cell<Option<Toasts>>>) -> impl IntoView {
    let toasts = use_toasts();
    toasts.success("Welcome", "Plan activated");
    slot.set(Some(toasts));
}

#[wasm_bindgen_test]
fn provider_renders_raised_toast() {
    let root = fresh_root();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! {
            <ToastProvider>
                <RaiseWelcome />
            </ToastProvider>
        }
    });

    let title = root.query_selector(".toast-title").unwrap().unwrap();
    assert_eq!(title.text_content().as_deref(), Some("Welcome"));
    let toast = root.query_selector(".toast").unwrap().unwrap();
    assert_eq!(toast.class_name(), "toast toast-success");
}

#[wasm_bindgen_test]
fn page_renders_every_section() {
    let root = fresh_root();
    let _handle = leptos::mount::mount_to(root.clone(), App);

    for id in ["home", "features", "how-it-works", "pricing"] {
        assert!(
            root.query_selector(&format!("#{id}")).unwrap().is_some(),
            "missing section #{id}"
        );
    }
    assert_eq!(root.query_selector_all(".plan-card").unwrap().length(), 3);
    assert_eq!(root.query_selector_all(".feature-card").unwrap().length(), 6);
    assert!(root.query_selector(".toast").unwrap().is_none());
}

#[wasm_bindgen_test]
fn unmounting_provider_tears_down_toasts() {
    let root = fresh_root();
    let slot = Rc::new(Cell::new(None));
    let handle = {
        let slot = Rc::clone(&slot);
        leptos::mount::mount_to(root.clone(), move || {
            view! {
                <ToastProvider>
                    <Capture slot=slot />
                </ToastProvider>
            }
        })
    };
    assert_eq!(root.query_selector_all(".toast").unwrap().length(), 1);
    let toasts = slot.get().unwrap();

    drop(handle);

    assert!(root.query_selector(".toast-stack").unwrap().is_none());
    // the queue is gone with its owner; a stale handle is inert
    toasts.success("Late", "after unmount");
    assert!(root.query_selector(".toast").unwrap().is_none());
}
