use thiserror::Error;

/// Errors raised by output formats and publishing.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("{0}")]
    NotSupported(String),

    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}
