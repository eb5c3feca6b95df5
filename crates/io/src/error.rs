//! Error types for lunaria-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the lunaria-io crate.
///
/// Underlying library errors are flattened to strings, so `serde_json` and
/// `std::io` error types do not appear in the public API.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when reading, writing or creating a file or directory fails.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from JSON encoding or decoding.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying serde_json failure.
        reason: String,
    },

    /// Returned when a loaded template does not have the ritual year shape.
    #[error("invalid template: {reason}")]
    InvalidTemplate {
        /// Description of the shape violation.
        reason: String,
    },
}

impl IoError {
    pub(crate) fn io(path: &std::path::Path, e: std::io::Error) -> Self {
        IoError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}

impl From<lunaria_calendar::CalendarError> for IoError {
    fn from(e: lunaria_calendar::CalendarError) -> Self {
        IoError::InvalidTemplate {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/template-2025.json"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/template-2025.json");
    }

    #[test]
    fn display_io() {
        let err = IoError::Io {
            path: PathBuf::from("/readonly/out.json"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "i/o error on /readonly/out.json: permission denied"
        );
    }

    #[test]
    fn display_json() {
        let err = IoError::Json {
            reason: "EOF while parsing".to_string(),
        };
        assert_eq!(err.to_string(), "json error: EOF while parsing");
    }

    #[test]
    fn display_invalid_template() {
        let err = IoError::InvalidTemplate {
            reason: "expected 13 months, got 12".to_string(),
        };
        assert_eq!(err.to_string(), "invalid template: expected 13 months, got 12");
    }

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: IoError = json_err.into();
        assert!(matches!(err, IoError::Json { .. }));
    }

    #[test]
    fn from_calendar_error() {
        let cal_err = lunaria_calendar::CalendarError::MonthCount { got: 12 };
        let err: IoError = cal_err.into();
        assert!(matches!(err, IoError::InvalidTemplate { .. }));
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
