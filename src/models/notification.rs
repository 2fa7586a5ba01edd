//! Notification model and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::audit::Audit;

/// Notification row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub booking_id: Uuid,
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub is_read: bool,

    pub username: Option<String>,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

/// Create notification request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    pub booking_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
}

/// Update notification request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotification {
    pub title: Option<String>,
    pub message: Option<String>,
    pub is_read: Option<bool>,
}
