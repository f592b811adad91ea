//! Error types for TBX serialization.

use thiserror::Error;

/// Error type for TBX serialization and deserialization.
#[derive(Error, Debug)]
pub enum SerdeError {
    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// IO error while writing serialized output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error message.
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for TBX serialization operations.
pub type Result<T> = std::result::Result<T, SerdeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_error_display() {
        let err = SerdeError::Custom("bad tree".to_string());
        assert_eq!(err.to_string(), "bad tree");
    }

    #[test]
    fn test_io_error_display() {
        let err: SerdeError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.to_string().contains("IO error"));
    }
}
