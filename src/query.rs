//! List request options.
//!
//! The parsed form of a caller's list request. Carries no knowledge of any
//! entity's schema; translating sort keys to columns is the adapter's job
//! (see [`crate::repository::resource::Resource`]).

use serde::Deserialize;

/// Sort direction, parsed case-insensitively from `ASC`/`DESC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// One requested ordering, wire format `"key|ASC"` (direction optional).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct SortBy {
    pub key: String,
    pub direction: SortDirection,
}

impl SortBy {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }
}

impl TryFrom<String> for SortBy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut parts = value.splitn(2, '|');
        let key = parts.next().unwrap_or_default().trim();
        if key.is_empty() {
            return Err(format!("Invalid sort expression: {:?}", value));
        }

        let direction = match parts.next().map(str::trim) {
            None | Some("") => SortDirection::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(other) => return Err(format!("Invalid sort direction: {:?}", other)),
        };

        Ok(SortBy {
            key: key.to_string(),
            direction,
        })
    }
}

/// Caller intent for a list request.
///
/// `is_deleted` selects exactly one of the two partitions: soft-deleted rows
/// when true, live rows otherwise. There is no "both" mode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListOptions {
    pub search: Option<String>,
    pub sort_by: Vec<SortBy>,
    pub is_deleted: bool,
    pub disable_paginate: bool,
    pub limit: i64,
    pub skip: i64,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            search: None,
            sort_by: Vec::new(),
            is_deleted: false,
            disable_paginate: false,
            limit: 10,
            skip: 0,
        }
    }
}

impl ListOptions {
    /// Search term, if present and non-blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sort_with_direction() {
        let sort = SortBy::try_from("name|DESC".to_string()).unwrap();
        assert_eq!(sort.key, "name");
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn direction_defaults_to_ascending() {
        let sort = SortBy::try_from("dueDate".to_string()).unwrap();
        assert_eq!(sort.key, "dueDate");
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn direction_is_case_insensitive() {
        let sort = SortBy::try_from("name|desc".to_string()).unwrap();
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn rejects_empty_key_and_junk_direction() {
        assert!(SortBy::try_from("|ASC".to_string()).is_err());
        assert!(SortBy::try_from("name|sideways".to_string()).is_err());
    }

    #[test]
    fn blank_search_is_ignored() {
        let options = ListOptions {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(options.search_term(), None);
    }

    #[test]
    fn deserializes_from_query_shape() {
        let options: ListOptions = serde_json::from_str(
            r#"{"search":"jane","sortBy":["name|ASC"],"isDeleted":true,"limit":5}"#,
        )
        .unwrap();
        assert_eq!(options.search_term(), Some("jane"));
        assert_eq!(options.sort_by.len(), 1);
        assert!(options.is_deleted);
        assert_eq!(options.limit, 5);
        assert_eq!(options.skip, 0);
    }
}
