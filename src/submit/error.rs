use thiserror::Error;

/// Échec renvoyé par une implémentation de [`EmailApi`](super::EmailApi).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("email service rejected the request ({status}): {text}")]
    Rejected { status: u16, text: String },
    #[error("transport error: {0}")]
    Transport(String),
}

impl SendError {
    pub fn rejected(status: u16, text: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            text: text.into(),
        }
    }

    pub fn transport<T: std::fmt::Display>(err: T) -> Self {
        Self::Transport(err.to_string())
    }
}
