//! HTTP calls to the salon backend.
//!
//! Thin gloo-net wrappers around the endpoints in [`shared::endpoints`].
//! Components dispatch these from `spawn_local` and turn the returned
//! [`ApiError`] into notices or chat bubbles; nothing here touches the UI.

use gloo_net::http::{Request, Response};
use shared::{
    endpoints, ApiError, ChatRequest, ChatResponse, GalleryImage, HealthResponse, LoginRequest,
    LoginResponse, UploadResponse,
};
use uuid::Uuid;

use crate::utils;

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Resolve a response into an error unless it carries a 2xx status.
async fn expect_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    if status == 401 {
        Err(ApiError::Auth(message))
    } else {
        Err(ApiError::Server { status, message })
    }
}

/// One-shot backend probe, logged at startup only.
pub async fn health() -> Result<HealthResponse, ApiError> {
    let response = Request::get(&utils::api_url(endpoints::HEALTH))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch the gallery collection in server order.
pub async fn fetch_gallery() -> Result<Vec<GalleryImage>, ApiError> {
    let response = Request::get(&utils::api_url(endpoints::GALLERY))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Exchange admin credentials for a bearer token.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response = Request::post(&utils::api_url(endpoints::ADMIN_LOGIN))
        .json(request)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Upload one image with an optional description, authenticated.
pub async fn upload_image(
    token: &str,
    file: &web_sys::File,
    description: &str,
) -> Result<UploadResponse, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Parse("could not build multipart form".to_string()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Parse("could not attach file".to_string()))?;
    form.append_with_str("description", description)
        .map_err(|_| ApiError::Parse("could not attach description".to_string()))?;

    let response = Request::post(&utils::api_url(endpoints::GALLERY))
        .header("Authorization", &bearer(token))
        .body(form)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Delete a gallery record, authenticated.
pub async fn delete_image(token: &str, id: &Uuid) -> Result<(), ApiError> {
    let response = Request::delete(&utils::api_url(&endpoints::gallery_image(id)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(response).await.map(|_| ())
}

/// Send one chat turn; the caller threads the session id.
pub async fn send_chat(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    let response = Request::post(&utils::api_url(endpoints::CHAT))
        .json(request)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
