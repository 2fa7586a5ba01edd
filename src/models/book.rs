//! Book model and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::audit::Audit;

/// Book row, hydrated with author and genre names via the list joins.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub author_id: Uuid,
    #[serde(skip_serializing)]
    pub genre_id: Uuid,
    pub name: String,
    pub synopsis: String,
    pub content: String,
    pub copies: i32,
    pub cover: String,
    pub is_new: bool,
    pub status: String,
    pub queue: i32,

    /// Joined relation columns (LEFT JOIN, so absent on dangling references).
    pub author_name: Option<String>,
    pub genre_name: Option<String>,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

/// Create book request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub author_id: Uuid,
    pub genre_id: Uuid,
    pub name: String,
    pub synopsis: String,
    pub content: String,
    #[serde(default)]
    pub copies: i32,
    pub cover: String,
}

/// Update book request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    pub author_id: Option<Uuid>,
    pub genre_id: Option<Uuid>,
    pub name: Option<String>,
    pub synopsis: Option<String>,
    pub content: Option<String>,
    pub copies: Option<i32>,
    pub cover: Option<String>,
    pub is_new: Option<bool>,
    pub status: Option<String>,
    pub queue: Option<i32>,
}
