use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{EntityId, ListRow};

/// Product row as returned by `POST /products/list` and
/// `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    /// Server-generated business code (e.g. "PRD-2026-0031"); absent until
    /// the first successful upsert round-trips.
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock_qty: i64,
    #[serde(default = "default_true")]
    pub is_editable: bool,
    #[serde(default = "default_true")]
    pub is_deletable: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl ListRow for Product {
    fn id(&self) -> EntityId {
        self.id
    }

    fn is_editable(&self) -> bool {
        self.is_editable
    }

    fn is_deletable(&self) -> bool {
        self.is_deletable
    }
}

/// Payload of `POST /products-upsert`. `id = None` creates, `Some` updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub id: Option<EntityId>,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub unit: String,
    pub price: f64,
}

impl From<&Product> for ProductDraft {
    fn from(p: &Product) -> Self {
        Self {
            id: Some(p.id),
            name: p.name.clone(),
            brand: p.brand.clone(),
            category: p.category.clone(),
            unit: p.unit.clone(),
            price: p.price,
        }
    }
}

/// Submitted filter values of the product list page, flattened into the
/// list request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub q: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub brand: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub category: String,
}

impl ProductFilter {
    pub fn active_count(&self) -> usize {
        [&self.q, &self.brand, &self.category]
            .iter()
            .filter(|v| !v.is_empty())
            .count()
    }
}
