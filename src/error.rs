/// Error types for document assembly.
use thiserror::Error;

/// Result type for document assembly operations.
pub type Result<T> = std::result::Result<T, DocError>;

/// Error types for document assembly.
#[derive(Error, Debug)]
pub enum DocError {
    /// ZIP container error
    #[error("ZIP error: {0}")]
    Zip(#[from] marula_zip::Error),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for DocError {
    fn from(err: std::fmt::Error) -> Self {
        DocError::Xml(err.to_string())
    }
}
