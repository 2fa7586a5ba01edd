//! User interest model and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::audit::Audit;

/// User interest row: one (user, genre) association.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserInterest {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    #[serde(skip_serializing)]
    pub genre_id: Uuid,

    pub genre_name: Option<String>,
    pub username: Option<String>,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

/// Create user interest request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInterest {
    pub user_id: Uuid,
    pub genre_id: Uuid,
}

/// Update user interest request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInterest {
    pub user_id: Option<Uuid>,
    pub genre_id: Option<Uuid>,
}
