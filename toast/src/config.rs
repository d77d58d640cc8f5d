//! Toast configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a toast stays on screen unless dismissed earlier.
pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(5);

/// Runtime settings for a [`crate::ToastCenter`].
///
/// Serialized form uses milliseconds:
///
/// ```json
/// { "lifetime_ms": 5000 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Time from enqueue to automatic removal.
    #[serde(rename = "lifetime_ms", with = "millis")]
    pub lifetime: Duration,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            lifetime: DEFAULT_LIFETIME,
        }
    }
}

impl ToastConfig {
    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self { lifetime }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
