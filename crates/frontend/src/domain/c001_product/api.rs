//! Product endpoints, thin wrappers over the shared API client.

use contracts::domain::c001_product::{Product, ProductDraft, ProductFilter};
use contracts::domain::common::EntityId;
use contracts::shared::envelope::{AckEnvelope, ApiError};
use contracts::shared::pagination::Paginated;

use crate::shared::api_client;

const RESOURCE: &str = "products";

pub async fn fetch_page(
    filters: &ProductFilter,
    page: usize,
    per_page: usize,
) -> Result<Paginated<Product>, ApiError> {
    api_client::fetch_list(RESOURCE, filters, page, per_page).await
}

pub async fn fetch_by_id(id: EntityId) -> Result<Product, ApiError> {
    api_client::fetch_detail(RESOURCE, id).await
}

pub async fn save(draft: &ProductDraft) -> Result<AckEnvelope, ApiError> {
    api_client::upsert(RESOURCE, draft).await
}

pub async fn remove(id: EntityId) -> Result<AckEnvelope, ApiError> {
    api_client::delete_row(RESOURCE, id).await
}
