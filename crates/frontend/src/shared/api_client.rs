//! API client for frontend-backend communication
//!
//! One thin layer over `gloo_net` implementing the four endpoint shapes
//! every resource exposes, with defensive decoding of the error envelopes.

use contracts::domain::common::EntityId;
use contracts::shared::envelope::{
    decode_success, AckEnvelope, ApiError, DataEnvelope, ListEnvelope, ListRequest,
};
use contracts::shared::pagination::Paginated;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Application identifier sent on every request.
const CLIENT_ID_HEADER: &str = "X-Client-Id";
const CLIENT_ID: &str = "backoffice-web";

/// Get the base URL for API requests
///
/// `API_BASE_URL` at compile time wins; otherwise the URL is constructed
/// from the current window location, using port 3000 for the backend
/// server. Empty string if window is not available.
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_headers(req: RequestBuilder) -> RequestBuilder {
    req.header(CLIENT_ID_HEADER, CLIENT_ID)
        .header("Accept", "application/json")
}

async fn read_error(response: Response) -> ApiError {
    let status = response.status();
    let url = response.url();
    let body = response.text().await.unwrap_or_default();
    log::warn!("request to {url} failed with HTTP {status}");
    ApiError::from_body(status, &body)
}

async fn read_success<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(read_error(response).await);
    }
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to read response: {e}")))?;
    decode_success(&body)
}

/// `POST /api/{resource}/list` with `{...filters, page, perPage}`.
pub async fn fetch_list<F, Row>(
    resource: &str,
    filters: &F,
    page: usize,
    per_page: usize,
) -> Result<Paginated<Row>, ApiError>
where
    F: Serialize,
    Row: DeserializeOwned,
{
    log::debug!("fetching {resource} list, page {page}");
    let body = ListRequest {
        filters,
        page,
        per_page,
    };
    let response = with_headers(Request::post(&api_url(&format!("/api/{resource}/list"))))
        .json(&body)
        .map_err(|e| ApiError::transport(format!("Failed to encode request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Network error: {e}")))?;
    let envelope: ListEnvelope<Row> = read_success(response).await?;
    Ok(envelope.into())
}

/// `GET /api/{resource}/{id}`.
pub async fn fetch_detail<Row>(resource: &str, id: EntityId) -> Result<Row, ApiError>
where
    Row: DeserializeOwned,
{
    let response = with_headers(Request::get(&api_url(&format!("/api/{resource}/{id}"))))
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Network error: {e}")))?;
    let envelope: DataEnvelope<Row> = read_success(response).await?;
    Ok(envelope.data)
}

/// `POST /api/{resource}-upsert` with the form payload.
pub async fn upsert<D: Serialize>(resource: &str, draft: &D) -> Result<AckEnvelope, ApiError> {
    let response = with_headers(Request::post(&api_url(&format!("/api/{resource}-upsert"))))
        .json(draft)
        .map_err(|e| ApiError::transport(format!("Failed to encode request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Network error: {e}")))?;
    read_success(response).await
}

/// `DELETE /api/{resource}/{id}`.
pub async fn delete_row(resource: &str, id: EntityId) -> Result<AckEnvelope, ApiError> {
    let response = with_headers(Request::delete(&api_url(&format!("/api/{resource}/{id}"))))
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Network error: {e}")))?;
    read_success(response).await
}
