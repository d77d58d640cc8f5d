//! Toast copy for every call-to-action on the page.
//!
//! There is no backend: buttons acknowledge the click with a toast instead.

use crate::toast::ToastMessage;
use scrapeai_toast::ToastKind;

pub const CONTACT_SALES: ToastMessage = ToastMessage {
    kind: ToastKind::Info,
    title: "Contact Sales Team",
    message: "Redirecting to our sales page. You can also email us at sales@scrapeai.com or call +1 (555) 123-4567.",
};

pub const SCHEDULE_DEMO: ToastMessage = ToastMessage {
    kind: ToastKind::Info,
    title: "Schedule Demo",
    message: "Opening calendar to schedule your personalized demo. Our team will show you how ScrapeAi can transform your data extraction process.",
};

/// Toast shown when a pricing plan button is pressed.
pub fn plan_selected(plan: &str) -> ToastMessage {
    match plan {
        "Starter" => ToastMessage {
            kind: ToastKind::Success,
            title: "Welcome to ScrapeAi!",
            message: "You can start using our free plan immediately. Redirecting to dashboard...",
        },
        "Professional" => ToastMessage {
            kind: ToastKind::Info,
            title: "Starting Free Trial",
            message: "Starting your 14-day free trial for the Professional plan. No credit card required!",
        },
        "Enterprise" => ToastMessage {
            kind: ToastKind::Info,
            title: "Thank You for Your Interest",
            message: "Our sales team will contact you within 24 hours to provide enterprise solutions.",
        },
        _ => ToastMessage {
            kind: ToastKind::Success,
            title: "Thank You for Choosing ScrapeAi",
            message: "We're excited to serve you!",
        },
    }
}

/// "Get Started" / "Start Scraping Now" land on the free plan.
pub fn get_started() -> ToastMessage {
    plan_selected("Starter")
}

/// Every "Start Free Trial" button starts the Professional trial.
pub fn free_trial() -> ToastMessage {
    plan_selected("Professional")
}
