use thiserror::Error;

/// Errors raised while managing toast timers.
#[derive(Debug, Error)]
pub enum ToastError {
    /// The host refused to register an expiry timer.
    #[error("failed to schedule toast expiry: {0}")]
    Schedule(String),
}
