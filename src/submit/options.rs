use std::time::Duration;

/// Paramètres de l'envoi : identifiants du service e-mail et délais.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOptions {
    pub service_id: String,
    pub template_id: String,
    pub timeout_ms: u64,
    pub loading_tick_ms: u64,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            service_id: "service_ypnwarg".to_string(),
            template_id: "template_xt23rn8".to_string(),
            timeout_ms: 5_000,
            loading_tick_ms: 500,
        }
    }
}

impl SubmitOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Jamais nul : `tokio::time::interval` refuse une période de zéro.
    pub fn loading_tick(&self) -> Duration {
        Duration::from_millis(self.loading_tick_ms.max(1))
    }
}
