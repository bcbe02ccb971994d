use thiserror::Error;

pub type Result<T> = std::result::Result<T, LutError>;

#[derive(Debug, Error)]
pub enum LutError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
