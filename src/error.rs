//! Application Errors
//!
//! Everything a store operation can fail with. Every variant ends up as a
//! toast; mutations also hand it back to the caller.

use serde::Deserialize;

use crate::models::TodoId;

/// Common result type for store and API operations
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),

    /// Input rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    /// `update_todo` called without an open edit session
    #[error("no todo selected for editing")]
    NoSelection,

    /// A delete for this todo is still waiting for the server
    #[error("todo {0} is already being deleted")]
    DeleteInFlight(TodoId),
}

impl AppError {
    /// Errors that should not produce a toast
    pub fn is_silent(&self) -> bool {
        matches!(self, AppError::DeleteInFlight(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            AppError::Network(err.to_string())
        }
    }
}

/// Spring Boot error body, e.g. `{"status":400,"error":"Bad Request","message":"Title cannot be empty"}`
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Pick the most useful message out of an error response body.
pub fn status_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.filter(|m| !m.is_empty()) {
            return message;
        }
        if let Some(error) = parsed.error.filter(|e| !e.is_empty()) {
            return error;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_prefers_spring_message() {
        let body = r#"{"timestamp":"2024-01-01T00:00:00","status":404,"error":"Not Found","message":"ToDo with ID 7 not found","path":"/todos/7"}"#;
        assert_eq!(status_message(404, body), "ToDo with ID 7 not found");
    }

    #[test]
    fn test_status_message_falls_back_to_error_field() {
        let body = r#"{"status":500,"error":"Internal Server Error","message":""}"#;
        assert_eq!(status_message(500, body), "Internal Server Error");
    }

    #[test]
    fn test_status_message_plain_text_and_empty() {
        assert_eq!(status_message(502, "  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(status_message(503, ""), "HTTP 503");
    }

    #[test]
    fn test_display() {
        let err = AppError::Status { status: 400, message: "Duplicate Assignee ID: 3".into() };
        assert_eq!(err.to_string(), "server responded with 400: Duplicate Assignee ID: 3");
        assert_eq!(AppError::NoSelection.to_string(), "no todo selected for editing");
    }

    #[test]
    fn test_only_in_flight_delete_is_silent() {
        assert!(AppError::DeleteInFlight(1).is_silent());
        assert!(!AppError::NoSelection.is_silent());
        assert!(!AppError::Network("offline".into()).is_silent());
    }
}
