use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{EntityId, ListRow};

/// Brand row. `product_count` drives the pre-flight delete check: a brand
/// with associated products comes back with `is_deletable = false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: EntityId,
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub product_count: usize,
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

impl ListRow for Brand {
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

/// Payload of `POST /brands-upsert`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDraft {
    pub id: Option<EntityId>,
    pub name: String,
    pub description: String,
}

impl From<&Brand> for BrandDraft {
    fn from(b: &Brand) -> Self {
        Self {
            id: Some(b.id),
            name: b.name.clone(),
            description: b.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandFilter {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub q: String,
}

impl BrandFilter {
    pub fn active_count(&self) -> usize {
        usize::from(!self.q.is_empty())
    }
}
