use serde::{Deserialize, Serialize};

/// Pagination descriptor shared by every list endpoint.
///
/// Invariants (maintained by [`PaginationDescriptor::normalize`]):
///   - `has_next ⇔ page < total_pages`
///   - `has_prev ⇔ page > 1`
///   - `total_pages = max(1, ceil(total_items / per_page))` whenever the
///     descriptor is computed client-side (some screens paginate locally).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDescriptor {
    /// Current page, 1-indexed.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationDescriptor {
    /// Empty first page — the state every list controller starts from.
    pub fn first_page(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            total_items: 0,
            total_pages: 0,
            has_next: false,
            has_prev: false,
        }
    }

    /// Compute a full descriptor client-side from totals.
    pub fn compute(page: usize, per_page: usize, total_items: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = (total_items.div_ceil(per_page)).max(1);
        let mut d = Self {
            page: page.max(1),
            per_page,
            total_items,
            total_pages,
            has_next: false,
            has_prev: false,
        };
        d.normalize();
        d
    }

    /// Re-derive `has_next` / `has_prev` from `page` and `total_pages`.
    pub fn normalize(&mut self) {
        self.has_next = self.page < self.total_pages;
        self.has_prev = self.page > 1;
    }
}

impl Default for PaginationDescriptor {
    fn default() -> Self {
        Self::first_page(10)
    }
}

/// Partial pagination update, shallow-merged into an existing descriptor.
///
/// Allows "just bump the page number" updates that do not yet know the
/// server's totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationPatch {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub total_items: Option<usize>,
    pub total_pages: Option<usize>,
}

impl PaginationPatch {
    pub fn page(page: usize) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// Shallow merge: only fields that are `Some` overwrite the target.
    /// `has_next` / `has_prev` are always re-derived afterwards.
    pub fn apply_to(&self, target: &mut PaginationDescriptor) {
        if let Some(page) = self.page {
            target.page = page.max(1);
        }
        if let Some(per_page) = self.per_page {
            target.per_page = per_page.max(1);
        }
        if let Some(total_items) = self.total_items {
            target.total_items = total_items;
        }
        if let Some(total_pages) = self.total_pages {
            target.total_pages = total_pages;
        }
        target.normalize();
    }
}

impl From<PaginationDescriptor> for PaginationPatch {
    fn from(d: PaginationDescriptor) -> Self {
        Self {
            page: Some(d.page),
            per_page: Some(d.per_page),
            total_items: Some(d.total_items),
            total_pages: Some(d.total_pages),
        }
    }
}

/// Rows plus their pagination descriptor, replaced wholesale per
/// successful fetch. Owned exclusively by the list controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<Row> {
    pub data: Vec<Row>,
    pub pagination: PaginationDescriptor,
}

impl<Row> Paginated<Row> {
    pub fn empty(per_page: usize) -> Self {
        Self {
            data: Vec::new(),
            pagination: PaginationDescriptor::first_page(per_page),
        }
    }
}

impl<Row> Default for Paginated<Row> {
    fn default() -> Self {
        Self::empty(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_consistency() {
        let d = PaginationDescriptor::compute(1, 10, 5);
        assert_eq!(d.total_pages, 1);
        assert!(!d.has_next);
        assert!(!d.has_prev);

        let d = PaginationDescriptor::compute(2, 10, 35);
        assert_eq!(d.total_pages, 4);
        assert!(d.has_next);
        assert!(d.has_prev);

        let d = PaginationDescriptor::compute(4, 10, 35);
        assert!(!d.has_next);
        assert!(d.has_prev);
    }

    #[test]
    fn test_compute_empty_has_one_page() {
        let d = PaginationDescriptor::compute(1, 10, 0);
        assert_eq!(d.total_pages, 1);
        assert!(!d.has_next);
        assert!(!d.has_prev);
    }

    #[test]
    fn test_patch_is_shallow_merge() {
        let mut d = PaginationDescriptor::compute(1, 20, 95);
        PaginationPatch::page(3).apply_to(&mut d);
        assert_eq!(d.page, 3);
        assert_eq!(d.per_page, 20);
        assert_eq!(d.total_items, 95);
        assert_eq!(d.total_pages, 5);
        assert!(d.has_next);
        assert!(d.has_prev);
    }

    #[test]
    fn test_patch_rederives_flags() {
        let mut d = PaginationDescriptor::compute(1, 10, 100);
        PaginationPatch::page(10).apply_to(&mut d);
        assert!(!d.has_next);
        assert!(d.has_prev);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let d = PaginationDescriptor::compute(2, 10, 15);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["perPage"], 10);
        assert_eq!(json["totalItems"], 15);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["hasNext"], false);
        assert_eq!(json["hasPrev"], true);
    }
}
