//! Error types for acctdeck-core
//!
//! Error codes, severities and detail payloads for the account page and
//! logout flow.

use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Account not found
    AccountNotFound,
    /// Logout endpoint rejected or unreachable
    LogoutFailed,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::AccountNotFound => write!(f, "ACCOUNT_NOT_FOUND"),
            ErrorCode::LogoutFailed => write!(f, "LOGOUT_FAILED"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Info,
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for acctdeck-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Account not found: {id}")]
    AccountNotFound { id: String },

    #[error("Logout failed: {message}")]
    LogoutFailed { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::AccountNotFound { .. } => ErrorCode::AccountNotFound,
            CoreError::LogoutFailed { .. } => ErrorCode::LogoutFailed,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::AccountNotFound { .. } => ErrorSeverity::Info,
            CoreError::LogoutFailed { .. } => ErrorSeverity::Error,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::AccountNotFound { id } => {
                details = details.with_detail(serde_json::json!({ "account_id": id }));
                details = details.with_suggestion(
                    "Use the /api/accounts endpoint to list all accounts.".to_string()
                );
            }
            CoreError::LogoutFailed { .. } => {
                details = details.with_suggestion(
                    "Check that auth.logout_url is reachable.".to_string()
                );
            }
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<reqwest::Error> for CoreError {
    fn from(error: reqwest::Error) -> Self {
        CoreError::LogoutFailed {
            message: error.to_string(),
        }
    }
}
