use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{EntityId, ListRow};

/// Read-only stock summary row shown on the inventory dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub id: EntityId,
    pub product_name: String,
    #[serde(default)]
    pub warehouse: String,
    #[serde(default)]
    pub on_hand: i64,
    #[serde(default)]
    pub reserved: i64,
    #[serde(default)]
    pub available: i64,
    /// Server-side threshold verdict; the client only renders it.
    #[serde(default)]
    pub low_stock: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ListRow for StockSummary {
    fn id(&self) -> EntityId {
        self.id
    }

    fn is_editable(&self) -> bool {
        false
    }

    fn is_deletable(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilter {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub q: String,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub only_low_stock: bool,
}

impl InventoryFilter {
    pub fn active_count(&self) -> usize {
        usize::from(!self.q.is_empty()) + usize::from(self.only_low_stock)
    }
}
