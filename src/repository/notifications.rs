//! Notifications resource adapter

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::models::notification::{CreateNotification, Notification, UpdateNotification};

use super::resource::{Resource, ResourceRepository};

pub struct NotificationsResource;

pub type NotificationsRepository = ResourceRepository<NotificationsResource>;

#[async_trait]
impl Resource for NotificationsResource {
    type Entity = Notification;
    type Create = CreateNotification;
    type Update = UpdateNotification;

    const TABLE: &'static str = "notifications";
    const ALIAS: &'static str = "notifications";
    const KIND: &'static str = "Notification";

    fn select_list() -> &'static str {
        "notifications.*, recipient.username AS username"
    }

    fn relations() -> &'static [&'static str] {
        &[
            "LEFT JOIN bookings booking ON booking.id = notifications.booking_id",
            "LEFT JOIN users recipient ON recipient.id = notifications.user_id",
        ]
    }

    fn search_predicate() -> &'static str {
        "notifications.title ILIKE $1 OR notifications.message ILIKE $1"
    }

    fn permitted_sort_columns() -> &'static [(&'static str, &'static str)] {
        &[
            ("title", "notifications.title"),
            ("isRead", "notifications.is_read"),
        ]
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &CreateNotification,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO notifications (id, booking_id, user_id, title, message, is_read) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(id)
        .bind(payload.booking_id)
        .bind(payload.user_id)
        .bind(&payload.title)
        .bind(&payload.message)
        .bind(payload.is_read)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    async fn apply_update(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &UpdateNotification,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE notifications SET \
             title = COALESCE($2, title), \
             message = COALESCE($3, message), \
             is_read = COALESCE($4, is_read) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.message)
        .bind(payload.is_read)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
