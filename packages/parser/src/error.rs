//! Error types for the parser.
//!
//! Structure recovery itself never fails: unrecognized input degrades to
//! content text. `ParserError` only covers the I/O boundary around it
//! (reading paragraph files, rendering and saving output).

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Input rejected before parsing.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The fallback display name was blank.
    #[error("Fallback document name must not be empty")]
    EmptyName,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParserError::InvalidInput("missing.txt does not exist".to_string());
        assert_eq!(err.to_string(), "Invalid input: missing.txt does not exist");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ParserError = io.into();
        assert!(matches!(err, ParserError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_empty_name_display() {
        assert_eq!(
            ParserError::EmptyName.to_string(),
            "Fallback document name must not be empty"
        );
    }
}
