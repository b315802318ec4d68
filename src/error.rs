//! Error handling module for orgchart
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Field validation failures are NOT errors in this sense: they stay attached
//! to the form as [`crate::validation::FieldErrors`] and never propagate.

use thiserror::Error;

/// Main error type for orgchart
#[derive(Error, Debug)]
pub enum OrgChartError {
    /// IO errors (snapshot file, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// State errors (mutex poisoning, invalid state)
    #[error("State error: {0}")]
    State(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for orgchart operations
pub type Result<T> = std::result::Result<T, OrgChartError>;

impl OrgChartError {
    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrgChartError::state("Store mutex poisoned");
        assert_eq!(err.to_string(), "State error: Store mutex poisoned");

        let err = OrgChartError::terminal("no tty");
        assert_eq!(err.to_string(), "Terminal error: no tty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: OrgChartError = io_err.into();
        assert!(matches!(err, OrgChartError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u64>("not a number").unwrap_err();
        let err: OrgChartError = json_err.into();
        assert!(matches!(err, OrgChartError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(OrgChartError::state("poisoned"), OrgChartError::State(_)));
        assert!(matches!(OrgChartError::terminal("no tty"), OrgChartError::Terminal(_)));
        assert!(matches!(OrgChartError::general("oops"), OrgChartError::General(_)));
    }
}
