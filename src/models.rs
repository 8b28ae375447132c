//! Data models and DTOs (Data Transfer Objects) for the URL shortener.
//!
//! Contains structures for the in-memory registries and API request/response
//! types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Registry Models
// ============================================================================

/// A shortened link held by the link registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortLink {
    /// The short token (e.g., "b2xVn2"), unique key
    pub token: String,
    /// The original long URL, stored verbatim
    pub long_url: String,
    /// ID of the user who created this link; immutable after creation
    pub owner_id: String,
    /// When the link was created
    pub created_at: String,
}

/// A registered user held by the user directory
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier
    pub id: String,
    /// User's email address, unique among users
    pub email: String,
    /// bcrypt hash of the user's password; never leaves the directory
    pub password_hash: String,
    /// When the user registered
    pub created_at: String,
}

// ============================================================================
// API Request DTOs
// ============================================================================

/// Request body for user registration
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Request body for logging in
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for creating a short link
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLinkRequest {
    /// The URL to shorten; stored as-is, no well-formedness check
    pub long_url: String,
}

/// Request body for updating a link's destination
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLinkRequest {
    pub long_url: String,
}

// ============================================================================
// API Response DTOs
// ============================================================================

/// Response containing link details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkResponse {
    /// The short token
    pub token: String,
    /// The full short URL
    pub short_url: String,
    /// The original long URL
    pub long_url: String,
    /// ID of the owning user
    pub owner_id: String,
    /// When the link was created
    pub created_at: String,
}

impl LinkResponse {
    /// Create a LinkResponse from a ShortLink entity and base URL
    pub fn from_link(link: ShortLink, base_url: &str) -> Self {
        Self {
            short_url: format!("{}/u/{}", base_url, link.token),
            token: link.token,
            long_url: link.long_url,
            owner_id: link.owner_id,
            created_at: link.created_at,
        }
    }
}

/// Response for listing the caller's links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkListResponse {
    /// Total count of links owned by the caller
    pub total: usize,
    /// List of links
    pub links: Vec<LinkResponse>,
}

/// Response containing user details (credential omitted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID
    pub id: String,
    /// User's email
    pub email: String,
    /// When the user registered
    pub created_at: String,
}

impl UserResponse {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            created_at: user.created_at.clone(),
        }
    }
}

/// Generic API error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code (for programmatic handling)
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Generic success message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_response_short_url() {
        let link = ShortLink {
            token: "b2xVn2".to_string(),
            long_url: "http://www.lighthouselabs.ca".to_string(),
            owner_id: "aJ48lW".to_string(),
            created_at: "2026-01-01 00:00:00".to_string(),
        };

        let response = LinkResponse::from_link(link, "http://localhost:8080");
        assert_eq!(response.short_url, "http://localhost:8080/u/b2xVn2");
        assert_eq!(response.token, "b2xVn2");
        assert_eq!(response.long_url, "http://www.lighthouselabs.ca");
    }

    #[test]
    fn test_user_response_omits_credential() {
        let user = User {
            id: "aJ48lW".to_string(),
            email: "a@a.com".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            created_at: "2026-01-01 00:00:00".to_string(),
        };

        let response = UserResponse::from_user(&user);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("a@a.com"));
    }
}
