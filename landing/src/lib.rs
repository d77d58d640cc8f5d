//! ScrapeAi landing page.
//!
//! Client-side rendered Leptos app: navigation, hero, features, how-it-works,
//! pricing and footer sections, a toast stack for button feedback, and two
//! canvas backgrounds. Build with `trunk serve` from this directory.

pub mod background;
pub mod config;
pub mod error;
pub mod logging;
pub mod sections;
pub mod toast;

use config::{SITE, VERSION};
use leptos::prelude::*;
use sections::*;
use toast::ToastProvider;
use tracing::{info, warn};

/// Browser entry point: panic hook, logging, document metadata, mount.
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();

    if let Err(err) = config::apply_document_meta(&SITE) {
        warn!(error = %err, "document metadata not applied");
    }

    info!(version = VERSION, "mounting landing page");
    leptos::mount::mount_to_body(App);
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastProvider>
            <div class="page">
                <Nav />
                <main>
                    <Hero />
                    <Features />
                    <HowItWorks />
                    <Pricing />
                </main>
                <Footer />
            </div>
        </ToastProvider>
    }
}
