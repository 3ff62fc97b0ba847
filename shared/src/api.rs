//! API error taxonomy and endpoint definitions
//!
//! Every request the frontend makes resolves to one of these errors on
//! failure; components turn them into user-visible notices at the call site.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ApiError {
    /// Network or connection error (no response received)
    Network(String),
    /// Server returned an error status
    Server { status: u16, message: String },
    /// Failed to parse or build a request/response body
    Parse(String),
    /// Authentication required or failed (401)
    Auth(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Auth(msg) => write!(f, "Auth error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// API endpoint definitions
pub mod endpoints {
    use super::Uuid;

    pub const HEALTH: &str = "/api/health";
    pub const GALLERY: &str = "/api/gallery";
    pub const ADMIN_LOGIN: &str = "/api/admin/login";
    pub const CHAT: &str = "/api/chat";

    pub fn gallery_image(id: &Uuid) -> String {
        format!("/api/gallery/{}", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoints::HEALTH, "/api/health");
        assert_eq!(endpoints::GALLERY, "/api/gallery");
        assert_eq!(endpoints::ADMIN_LOGIN, "/api/admin/login");
        assert_eq!(endpoints::CHAT, "/api/chat");
    }

    #[test]
    fn gallery_image_path_embeds_id() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(
            endpoints::gallery_image(&id),
            "/api/gallery/550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn error_display_includes_status() {
        let err = ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (500): boom");
    }
}
