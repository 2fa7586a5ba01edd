//! Page envelope for list responses.

use serde::Serialize;

/// Pagination metadata, recomputed from `total_data` and `size` rather than
/// trusted from caller input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Requested offset.
    pub page: i64,
    /// Effective page size. Equals `total_data` when pagination is disabled.
    pub size: i64,
    /// Number of records in this page.
    pub total: i64,
    /// Total records in the filtered partition, independent of pagination.
    pub total_data: i64,
    /// `ceil(total_data / size)`; 1 when size is zero (everything fits one page).
    pub page_count: i64,
}

impl PageMeta {
    pub fn new(page: i64, size: i64, total: i64, total_data: i64) -> Self {
        let page_count = if size > 0 {
            (total_data + size - 1) / size
        } else {
            1
        };

        Self {
            page,
            size,
            total,
            total_data,
            page_count,
        }
    }
}

/// A page of records plus its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, meta: PageMeta) -> Self {
        Self { data, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(PageMeta::new(0, 2, 2, 3).page_count, 2);
        assert_eq!(PageMeta::new(0, 2, 2, 4).page_count, 2);
        assert_eq!(PageMeta::new(0, 10, 3, 3).page_count, 1);
    }

    #[test]
    fn zero_size_means_single_page() {
        let meta = PageMeta::new(0, 0, 0, 0);
        assert_eq!(meta.page_count, 1);
    }

    #[test]
    fn envelope_serializes_camel_case() {
        let meta = PageMeta::new(2, 2, 1, 3);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["totalData"], 3);
        assert_eq!(json["pageCount"], 2);
    }
}
