use async_trait::async_trait;

use super::error::SendError;
use super::payload::SubmissionPayload;

/// Réponse d'acceptation du service e-mail.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub status: u16,
    pub text: String,
}

impl SendReceipt {
    pub fn ok() -> Self {
        Self {
            status: 200,
            text: "OK".to_string(),
        }
    }
}

/// Service tiers d'envoi d'e-mails, vu comme une boîte noire.
#[async_trait]
pub trait EmailApi: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        payload: &SubmissionPayload,
    ) -> Result<SendReceipt, SendError>;
}
