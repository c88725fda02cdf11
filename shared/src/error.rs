//! Error types for the shared provider scaffolding

#[derive(Debug, thiserror::Error)]
pub enum SharedError {
    #[error("attribute '{0}' not found")]
    AttributeNotFound(String),

    #[error("attribute '{0}' is not declared in the schema")]
    UnknownAttribute(String),

    #[error("type mismatch for '{attribute}': expected {expected}, got {actual}")]
    TypeMismatch {
        attribute: String,
        expected: String,
        actual: String,
    },

    #[error("list index {0} out of bounds")]
    IndexOutOfBounds(usize),

    #[error("invalid path navigation")]
    InvalidPath,

    #[error("failed saving state: {}", .0.join("; "))]
    StateWrite(Vec<String>),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("decoding error: {0}")]
    Decoding(String),

    #[error("could not parse version: {0}")]
    Version(String),

    #[error("provider not configured")]
    ProviderNotConfigured,

    #[error(transparent)]
    Client(#[from] jfrog_client::ClientError),

    #[error("{0}")]
    Custom(String),
}

/// Result type alias for scaffolding operations
pub type Result<T> = std::result::Result<T, SharedError>;

impl From<String> for SharedError {
    fn from(s: String) -> Self {
        SharedError::Custom(s)
    }
}

impl From<&str> for SharedError {
    fn from(s: &str) -> Self {
        SharedError::Custom(s.to_string())
    }
}
