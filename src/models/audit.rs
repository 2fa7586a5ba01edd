//! Audit base fields shared by every entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Authenticated identity attributed to a mutation.
///
/// Passed explicitly into every lifecycle operation rather than pulled from
/// ambient request state, so the engine stays testable without a simulated
/// request pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub display_name: String,
}

impl Actor {
    pub fn new(id: Uuid, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// Create/update/delete stamps embedded in every entity row.
///
/// Timestamps are integer Unix seconds. The `*_by` labels are externally
/// visible; the `*_by_id` identifiers never leave the backend. Deletion state
/// is derived from `deleted_at` alone; there is no stored boolean flag, so
/// restore is simply clearing the timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Audit {
    pub created_at: Option<i64>,
    pub created_by: Option<String>,
    #[serde(skip_serializing)]
    pub created_by_id: Option<Uuid>,

    pub updated_at: Option<i64>,
    pub updated_by: Option<String>,
    #[serde(skip_serializing)]
    pub updated_by_id: Option<Uuid>,

    pub deleted_at: Option<i64>,
    pub deleted_by: Option<String>,
    #[serde(skip_serializing)]
    pub deleted_by_id: Option<Uuid>,
}

impl Audit {
    /// A record is soft-deleted exactly when `deleted_at` is set.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletion_state_follows_deleted_at() {
        let mut audit = Audit::default();
        assert!(!audit.is_deleted());

        audit.deleted_at = Some(1_700_000_000);
        assert!(audit.is_deleted());

        audit.deleted_at = None;
        assert!(!audit.is_deleted());
    }

    #[test]
    fn actor_ids_are_not_serialized() {
        let audit = Audit {
            created_at: Some(1_700_000_000),
            created_by: Some("Jane Doe".to_string()),
            created_by_id: Some(Uuid::new_v4()),
            ..Default::default()
        };

        let json = serde_json::to_value(&audit).unwrap();
        assert_eq!(json["createdBy"], "Jane Doe");
        assert!(json.get("createdById").is_none());
        assert!(json.get("updatedById").is_none());
        assert!(json.get("deletedById").is_none());
    }
}
