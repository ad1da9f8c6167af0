//! Error types for Hapil

use thiserror::Error;

/// Main error type for quote loading and navigation
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The data set resolved to zero records
    #[error("Quote data set is empty")]
    EmptyDataSet,

    /// Two records in the data set share an id
    #[error("Duplicate quote id: {0}")]
    DuplicateId(u64),

    /// The data asset is not a valid quote array
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An alternate data asset could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using QuoteError
pub type QuoteResult<T> = Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", QuoteError::EmptyDataSet),
            "Quote data set is empty"
        );
        assert_eq!(
            format!("{}", QuoteError::DuplicateId(7)),
            "Duplicate quote id: 7"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: QuoteError = io_err.into();
        assert!(matches!(err, QuoteError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: QuoteError = json_err.into();
        assert!(matches!(err, QuoteError::Parse(_)));
    }
}
