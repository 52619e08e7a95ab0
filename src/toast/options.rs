use std::time::Duration;

use crate::dom;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastOptions {
    pub container_id: String,
    pub auto_dismiss_ms: u64,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            container_id: dom::TOAST_CONTAINER_ID.to_string(),
            auto_dismiss_ms: 5_000,
        }
    }
}

impl ToastOptions {
    /// `None` quand `auto_dismiss_ms` vaut zéro : le toast reste jusqu'à fermeture.
    pub fn auto_dismiss(&self) -> Option<Duration> {
        if self.auto_dismiss_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.auto_dismiss_ms))
        }
    }
}
