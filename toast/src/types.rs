//! Notification record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a toast, unique for the lifetime of the queue that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw counter value, handy as a keyed-list key in the view layer.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Info,
    Warning,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single active notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&ToastKind::Warning).unwrap();
        assert_eq!(json, "\"warning\"");

        let kind: ToastKind = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(kind, ToastKind::Success);
    }

    #[test]
    fn id_display_is_prefixed() {
        assert_eq!(ToastId::new(7).to_string(), "toast-7");
        assert_eq!(ToastId::new(7).get(), 7);
    }
}
