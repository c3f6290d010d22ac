//! Error types for testrun
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ClipboardError, FetchError};

/// Result type alias for testrun operations
pub type TestRunResult<T> = Result<T, TestRunError>;

/// Main error type for testrun operations
#[derive(Error, Debug)]
pub enum TestRunError {
    /// Config file could not be deserialized
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No catalog source configured or given on the command line
    #[error("no catalog source configured - pass --source or set [source] url in testrun.toml")]
    NoSource,

    /// Catalog could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Clipboard write failed
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_config() {
        let err = TestRunError::InvalidConfig {
            file: PathBuf::from("testrun.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in testrun.toml: expected a table"
        );
    }

    #[test]
    fn test_error_display_fetch_is_transparent() {
        let err: TestRunError = FetchError::Status {
            url: "https://example.com/cases.txt".to_string(),
            status: 404,
            reason: "Not Found".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "HTTP 404: Not Found (https://example.com/cases.txt)"
        );
    }
}
