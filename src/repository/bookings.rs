//! Bookings resource adapter

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::models::booking::{Booking, CreateBooking, UpdateBooking};

use super::resource::{Resource, ResourceRepository};

pub struct BookingsResource;

pub type BookingsRepository = ResourceRepository<BookingsResource>;

#[async_trait]
impl Resource for BookingsResource {
    type Entity = Booking;
    type Create = CreateBooking;
    type Update = UpdateBooking;

    const TABLE: &'static str = "bookings";
    const ALIAS: &'static str = "bookings";
    const KIND: &'static str = "Booking";

    fn select_list() -> &'static str {
        "bookings.*, book.name AS book_name, author.name AS book_author_name, \
         borrower.username AS username"
    }

    fn relations() -> &'static [&'static str] {
        &[
            "LEFT JOIN books book ON book.id = bookings.book_id",
            "LEFT JOIN authors author ON author.id = book.author_id",
            "LEFT JOIN users borrower ON borrower.id = bookings.user_id",
        ]
    }

    fn search_predicate() -> &'static str {
        "book.name ILIKE $1 OR borrower.username ILIKE $1"
    }

    fn permitted_sort_columns() -> &'static [(&'static str, &'static str)] {
        &[
            ("dueDate", "bookings.due_date"),
            ("duration", "bookings.duration"),
            ("book", "book.name"),
            ("username", "borrower.username"),
        ]
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &CreateBooking,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO bookings (id, book_id, user_id, duration, due_date) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(payload.book_id)
        .bind(payload.user_id)
        .bind(payload.duration)
        .bind(payload.due_date)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    async fn apply_update(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &UpdateBooking,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE bookings SET \
             book_id = COALESCE($2, book_id), \
             user_id = COALESCE($3, user_id), \
             duration = COALESCE($4, duration), \
             due_date = COALESCE($5, due_date) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(payload.book_id)
        .bind(payload.user_id)
        .bind(payload.duration)
        .bind(payload.due_date)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
