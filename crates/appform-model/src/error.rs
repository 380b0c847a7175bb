use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
