use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A fetch failure is not an application error: it is rendered as a
/// message and the process still exits with `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Fragment rendered (stock list or failure message)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config file, output file, invalid setup)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures of the fetch-render cycle.
///
/// Every variant displays as the exact message shown in place of the card
/// grid, so callers can render `error.to_string()` verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{message}")]
    MissingIdentifier { message: String },

    #[error("{message}")]
    NetworkFailure { message: String },

    #[error("{message}")]
    MalformedResponse { message: String },

    #[error("Invalid identifier: {reason}")]
    InvalidIdentifier { reason: String },
}

impl FetchError {
    /// Message used for any non-success HTTP status
    pub const NOT_OK: &'static str = "Network response was not ok";

    pub fn not_ok() -> Self {
        FetchError::NetworkFailure {
            message: Self::NOT_OK.to_string(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        FetchError::NetworkFailure {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        FetchError::MalformedResponse {
            message: message.into(),
        }
    }
}

/// Application-level errors outside the render path.
#[derive(Debug, Error)]
pub enum StockFetcherError {
    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_fetch_error_displays_bare_message() {
        let error = FetchError::MissingIdentifier {
            message: "Dealer ID not provided.".to_string(),
        };
        assert_eq!(error.to_string(), "Dealer ID not provided.");
        assert_eq!(FetchError::not_ok().to_string(), "Network response was not ok");
        assert_eq!(
            FetchError::malformed("expected value at line 1 column 1").to_string(),
            "expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_invalid_identifier_display() {
        let error = FetchError::InvalidIdentifier {
            reason: "dealer-id contains path separators".to_string(),
        };
        let display = error.to_string();
        assert!(display.starts_with("Invalid identifier"));
        assert!(display.contains("path separators"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = StockFetcherError::FileWriteError {
            path: PathBuf::from("/test/stock.html"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/stock.html"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = StockFetcherError::InvalidConfig {
            message: "base_url must not be empty".to_string(),
            hint: "Remove the field to use the default".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid configuration"));
        assert!(display.contains("base_url must not be empty"));
        assert!(display.contains("Remove the field"));
    }
}
