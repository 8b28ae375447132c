//! Custom error types for the URL shortener application.
//!
//! Implements proper error handling with automatic HTTP response conversion.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::ErrorResponse;

/// Application-level errors
#[derive(Debug)]
pub enum AppError {
    /// Link token was not found
    NotFound(String),
    /// No caller identity (not logged in)
    Unauthenticated(String),
    /// Caller identity present but not the resource owner
    Forbidden(String),
    /// Email already registered
    DuplicateEmail(String),
    /// Required form field was empty or absent
    MissingField(String),
    /// Login attempted with an unregistered email
    UnknownEmail(String),
    /// Login attempted with the wrong password
    WrongPassword(String),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Unauthenticated(msg) => write!(f, "Unauthenticated: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::DuplicateEmail(msg) => write!(f, "Duplicate email: {}", msg),
            AppError::MissingField(msg) => write!(f, "Missing field: {}", msg),
            AppError::UnknownEmail(msg) => write!(f, "Unknown email: {}", msg),
            AppError::WrongPassword(msg) => write!(f, "Wrong password: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// ============================================================================
// Constructor Methods
// ============================================================================

impl AppError {
    /// Create a NotFound error for a link token
    pub fn link_not_found(token: &str) -> Self {
        AppError::NotFound(format!("Link with token '{}' not found", token))
    }

    /// Create an Unauthenticated error for requests without a session
    pub fn not_logged_in() -> Self {
        AppError::Unauthenticated("Not logged in".into())
    }

    /// Create a Forbidden error for resource ownership violation
    pub fn not_owner(token: &str) -> Self {
        AppError::Forbidden(format!(
            "You do not have permission to modify link '{}'",
            token
        ))
    }

    /// Create a DuplicateEmail error
    pub fn duplicate_email(email: &str) -> Self {
        AppError::DuplicateEmail(format!("Email '{}' is already registered", email))
    }

    /// Create a MissingField error
    pub fn missing_field(field: &str) -> Self {
        AppError::MissingField(format!("Field '{}' must not be empty", field))
    }

    /// Create an UnknownEmail error
    pub fn unknown_email(email: &str) -> Self {
        AppError::UnknownEmail(format!("Email '{}' is not registered", email))
    }

    /// Create a WrongPassword error
    pub fn wrong_password() -> Self {
        AppError::WrongPassword("Password does not match".into())
    }

    /// Create an InternalError with a message
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::InternalError(message.into())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::DuplicateEmail(_) => StatusCode::BAD_REQUEST,
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownEmail(_) => StatusCode::FORBIDDEN,
            AppError::WrongPassword(_) => StatusCode::FORBIDDEN,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            AppError::Unauthenticated(msg) => ("UNAUTHENTICATED", msg.clone()),
            AppError::Forbidden(msg) => ("FORBIDDEN", msg.clone()),
            AppError::DuplicateEmail(msg) => ("DUPLICATE_EMAIL", msg.clone()),
            AppError::MissingField(msg) => ("MISSING_FIELD", msg.clone()),
            AppError::UnknownEmail(msg) => ("UNKNOWN_EMAIL", msg.clone()),
            AppError::WrongPassword(msg) => ("WRONG_PASSWORD", msg.clone()),
            AppError::InternalError(msg) => ("INTERNAL_ERROR", msg.clone()),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(message, error_code))
    }
}

/// Convert bcrypt errors to AppError
impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        log::error!("bcrypt error: {:?}", err);
        AppError::InternalError(format!("Password hashing failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Unauthenticated("test".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("test".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::DuplicateEmail("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MissingField("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnknownEmail("test".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::WrongPassword("test".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::InternalError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_display() {
        let err = AppError::NotFound("Link not found".into());
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_all_error_variants_have_responses() {
        let errors = vec![
            AppError::NotFound("test".into()),
            AppError::Unauthenticated("test".into()),
            AppError::Forbidden("test".into()),
            AppError::DuplicateEmail("test".into()),
            AppError::MissingField("test".into()),
            AppError::UnknownEmail("test".into()),
            AppError::WrongPassword("test".into()),
            AppError::InternalError("test".into()),
        ];

        for err in errors {
            let response = err.error_response();
            assert!(response.status().is_client_error() || response.status().is_server_error());
        }
    }

    #[test]
    fn test_constructor_methods() {
        assert!(matches!(
            AppError::link_not_found("abc123"),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::not_logged_in(),
            AppError::Unauthenticated(_)
        ));
        assert!(matches!(
            AppError::not_owner("abc123"),
            AppError::Forbidden(_)
        ));
        assert!(matches!(
            AppError::duplicate_email("a@a.com"),
            AppError::DuplicateEmail(_)
        ));
        assert!(matches!(
            AppError::missing_field("email"),
            AppError::MissingField(_)
        ));
        assert!(matches!(
            AppError::unknown_email("a@a.com"),
            AppError::UnknownEmail(_)
        ));
        assert!(matches!(
            AppError::wrong_password(),
            AppError::WrongPassword(_)
        ));
        assert!(matches!(
            AppError::internal("test"),
            AppError::InternalError(_)
        ));
    }

    #[test]
    fn test_constructor_messages() {
        let err = AppError::link_not_found("abc123");
        assert!(err.to_string().contains("abc123"));

        let err = AppError::duplicate_email("a@a.com");
        assert!(err.to_string().contains("a@a.com"));

        let err = AppError::missing_field("password");
        assert!(err.to_string().contains("password"));
    }
}
