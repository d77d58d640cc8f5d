//! # scrapeai-toast
//!
//! Transient notification queue for the ScrapeAi landing page.
//!
//! A toast is a short message (success, info or warning) that appears on
//! screen, disappears on its own after a fixed lifetime, and can be closed
//! early by the user. This crate owns that lifecycle and nothing else: it has
//! no knowledge of the DOM or of any UI framework, so it runs and tests on the
//! host like any other library.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use scrapeai_toast::{ManualScheduler, ToastCenter, ToastKind};
//!
//! let clock = ManualScheduler::new();
//! let toasts = ToastCenter::new(clock.clone());
//!
//! let id = toasts.notify(ToastKind::Success, "Welcome", "Plan activated");
//! assert_eq!(toasts.len(), 1);
//!
//! // Closing early cancels the pending expiry timer.
//! toasts.dismiss(id);
//! assert!(toasts.is_empty());
//! assert_eq!(clock.pending(), 0);
//!
//! // Untouched toasts expire after the configured lifetime (5s by default).
//! toasts.info("Heads up", "This one goes away on its own");
//! clock.advance(Duration::from_secs(5));
//! assert!(toasts.is_empty());
//! ```
//!
//! ## Architecture
//!
//! - [`ToastQueue`] - ordered collection with id allocation
//! - [`Scheduler`] - timer seam; the browser build plugs in `setTimeout`,
//!   tests use [`ManualScheduler`]
//! - [`ToastCenter`] - queue + one cancellable expiry timer per toast +
//!   change listener for the view layer
//! - [`ToastConfig`] - lifetime setting

mod center;
mod config;
mod error;
mod queue;
mod scheduler;
mod types;

pub use center::ToastCenter;
pub use config::{DEFAULT_LIFETIME, ToastConfig};
pub use error::ToastError;
pub use queue::ToastQueue;
pub use scheduler::{ManualHandle, ManualScheduler, Scheduler, Task};
pub use types::{Toast, ToastId, ToastKind};
