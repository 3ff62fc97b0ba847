use serde::{Deserialize, Serialize};
use uuid::Uuid;

// API error taxonomy and endpoint table
pub mod api;
pub use api::{endpoints, ApiError};

/// One photo in the salon's work gallery.
///
/// Owned by the backend; the frontend holds a refreshable local copy in the
/// order the server returned it. The payload is base64-encoded JPEG data
/// rendered inline as a data URI, so no separate media requests are needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: Uuid,
    /// Original filename as uploaded by the admin
    #[serde(default)]
    pub filename: String,
    /// Base64-encoded image bytes
    pub image_data: String,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO 8601 upload timestamp, display-only
    #[serde(default)]
    pub uploaded_at: String,
}

impl GalleryImage {
    /// Inline `src` value for an `<img>` tag.
    pub fn data_uri(&self) -> String {
        format!("data:image/jpeg;base64,{}", self.image_data)
    }
}

/// Credential pair submitted by the admin login form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response carrying the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// One turn sent to the chat assistant.
///
/// `session_id` is the opaque identifier the server assigned on the first
/// exchange; it is the empty string until then. Echoing it back is what
/// threads a multi-turn conversation server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: String,
}

/// Assistant reply plus the session identifier to use from now on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub session_id: String,
}

/// Response from a successful gallery upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(default)]
    pub id: Option<Uuid>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exact JSON shape the backend emits for a gallery record.
    #[test]
    fn gallery_image_parses_backend_shape() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "filename": "balayage.jpg",
            "image_data": "aGVsbG8=",
            "description": "Balayage and blow-dry",
            "uploaded_at": "2026-07-14T11:02:33.120000"
        }"#;
        let image: GalleryImage = serde_json::from_str(json).unwrap();
        assert_eq!(image.filename, "balayage.jpg");
        assert_eq!(image.description.as_deref(), Some("Balayage and blow-dry"));
        assert_eq!(image.data_uri(), "data:image/jpeg;base64,aGVsbG8=");
    }

    #[test]
    fn gallery_image_tolerates_sparse_records() {
        // description may be null and older records lack filename/uploaded_at
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "image_data": "aGVsbG8=",
            "description": null
        }"#;
        let image: GalleryImage = serde_json::from_str(json).unwrap();
        assert!(image.description.is_none());
        assert!(image.filename.is_empty());
        assert!(image.uploaded_at.is_empty());
    }

    #[test]
    fn login_response_parses_bearer_grant() {
        let json = r#"{"access_token": "eyJhbGciOi.header.sig", "token_type": "bearer"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "eyJhbGciOi.header.sig");
        assert_eq!(response.token_type, "bearer");
    }

    #[test]
    fn chat_request_always_carries_session_field() {
        // The first exchange sends an empty session id rather than omitting it
        let request = ChatRequest {
            message: "Hello".to_string(),
            session_id: String::new(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""session_id":"""#));
        assert!(json.contains(r#""message":"Hello""#));
    }

    #[test]
    fn chat_response_roundtrip() {
        let json = r#"{"response": "We open at 11 AM.", "session_id": "c0ffee"}"#;
        let reply: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(reply.response, "We open at 11 AM.");
        assert_eq!(reply.session_id, "c0ffee");
    }

    #[test]
    fn upload_response_parses_with_and_without_id() {
        let json = r#"{"message": "Image uploaded successfully", "id": "550e8400-e29b-41d4-a716-446655440000"}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert!(response.id.is_some());

        let bare: UploadResponse = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert!(bare.id.is_none());
    }
}
