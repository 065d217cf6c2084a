//! Application Errors
//!
//! One error type for every failure a page can surface to the user.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Request could not be sent or did not complete
    #[error("network error: {0}")]
    Network(String),
    /// Rejected locally before reaching the backend
    #[error("{0}")]
    Validation(String),
    /// Backend answered 401/403
    #[error("not authorized")]
    Auth,
    #[error("not found")]
    NotFound,
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    /// Response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Browser storage unavailable or write failed
    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Map a non-success HTTP status to an error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => AppError::Auth,
            404 => AppError::NotFound,
            _ => AppError::Server { status, message: message.into() },
        }
    }

    /// Short text for a toast
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Auth => "You are not allowed to do that. Please sign in again.".to_string(),
            AppError::NotFound => "That sweet no longer exists.".to_string(),
            AppError::Server { .. } | AppError::Decode(_) => "Something went wrong on the server.".to_string(),
            AppError::Storage(_) => "Your browser refused to store the session.".to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            AppError::from_status(status.as_u16(), e.to_string())
        } else {
            AppError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::from_status(401, ""), AppError::Auth);
        assert_eq!(AppError::from_status(403, ""), AppError::Auth);
        assert_eq!(AppError::from_status(404, ""), AppError::NotFound);
        assert_eq!(
            AppError::from_status(500, "boom"),
            AppError::Server { status: 500, message: "boom".to_string() }
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = AppError::Validation("Only 3 units available".to_string());
        assert_eq!(err.user_message(), "Only 3 units available");
        assert_eq!(err.to_string(), "Only 3 units available");
    }
}
