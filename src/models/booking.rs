//! Booking model and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::audit::Audit;

/// Booking row, hydrated with book and borrower summaries via the list joins.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub book_id: Uuid,
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    /// Loan duration in days.
    pub duration: i32,
    /// Due date as Unix seconds.
    pub due_date: i64,

    pub book_name: Option<String>,
    pub book_author_name: Option<String>,
    pub username: Option<String>,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

/// Create booking request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub book_id: Uuid,
    pub user_id: Uuid,
    pub duration: i32,
    pub due_date: i64,
}

/// Update booking request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBooking {
    pub book_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub duration: Option<i32>,
    pub due_date: Option<i64>,
}
