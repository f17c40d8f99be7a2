//! Brand endpoints. Brands have no detail endpoint: the list row already
//! carries every editable field.

use contracts::domain::c002_brand::{Brand, BrandDraft, BrandFilter};
use contracts::domain::common::EntityId;
use contracts::shared::envelope::{AckEnvelope, ApiError};
use contracts::shared::pagination::Paginated;

use crate::shared::api_client;

const RESOURCE: &str = "brands";

pub async fn fetch_page(
    filters: &BrandFilter,
    page: usize,
    per_page: usize,
) -> Result<Paginated<Brand>, ApiError> {
    api_client::fetch_list(RESOURCE, filters, page, per_page).await
}

pub async fn save(draft: &BrandDraft) -> Result<AckEnvelope, ApiError> {
    api_client::upsert(RESOURCE, draft).await
}

pub async fn remove(id: EntityId) -> Result<AckEnvelope, ApiError> {
    api_client::delete_row(RESOURCE, id).await
}
