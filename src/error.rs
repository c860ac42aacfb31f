/// Error types for lexdesk
///
/// The recency tracker and the intent router never fail. Errors come from the
/// edges: rejected submissions, configuration, and I/O.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for lexdesk operations
#[derive(Error, Debug)]
pub enum DeskError {
    /// Submission was empty or whitespace only
    #[error("Submission is empty")]
    EmptySubmission,

    /// Submission exceeds maximum length
    #[error("Submission exceeds maximum allowed length of {0} characters")]
    QueryTooLong(usize),

    /// Recent item lookup failed
    #[error("Recent item not found: {0}")]
    EntryNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (config files, stdin)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for lexdesk operations
pub type Result<T> = std::result::Result<T, DeskError>;

/// Convert DeskError to a user-friendly error message
impl DeskError {
    pub fn user_message(&self) -> String {
        match self {
            DeskError::EmptySubmission => {
                "Type a question, a drafting request or a workflow to get started".to_string()
            }
            DeskError::QueryTooLong(max) => {
                format!("Request is too long. Keep it under {} characters", max)
            }
            DeskError::EntryNotFound(what) => {
                format!("No recent item matches '{}'", what)
            }
            DeskError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            DeskError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            DeskError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            DeskError::Logging(msg) => {
                format!("Could not set up logging: {}", msg)
            }
            DeskError::Generic(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = DeskError::EntryNotFound("7".to_string());
        assert!(err.user_message().contains("'7'"));

        let err = DeskError::QueryTooLong(10_000);
        assert!(err.user_message().contains("10000"));
    }

    #[test]
    fn test_error_display() {
        let err = DeskError::Config("recent_capacity must be at least 1".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Configuration error"));
        assert!(display.contains("recent_capacity"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DeskError = io.into();
        assert!(matches!(err, DeskError::Io(_)));
    }
}
