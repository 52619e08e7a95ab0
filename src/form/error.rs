use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field id '{0}'")]
    UnknownField(String),
    #[error("no service item at index {0}")]
    UnknownServiceItem(usize),
}
