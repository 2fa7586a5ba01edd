//! Books resource adapter

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::models::book::{Book, CreateBook, UpdateBook};

use super::resource::{Resource, ResourceRepository};

pub struct BooksResource;

pub type BooksRepository = ResourceRepository<BooksResource>;

#[async_trait]
impl Resource for BooksResource {
    type Entity = Book;
    type Create = CreateBook;
    type Update = UpdateBook;

    const TABLE: &'static str = "books";
    const ALIAS: &'static str = "books";
    const KIND: &'static str = "Book";

    fn select_list() -> &'static str {
        "books.*, author.name AS author_name, genre.name AS genre_name"
    }

    fn relations() -> &'static [&'static str] {
        &[
            "LEFT JOIN authors author ON author.id = books.author_id",
            "LEFT JOIN genres genre ON genre.id = books.genre_id",
        ]
    }

    fn search_predicate() -> &'static str {
        "books.name ILIKE $1 OR books.synopsis ILIKE $1 \
         OR author.name ILIKE $1 OR genre.name ILIKE $1"
    }

    fn permitted_sort_columns() -> &'static [(&'static str, &'static str)] {
        &[
            ("name", "books.name"),
            ("copies", "books.copies"),
            ("status", "books.status"),
            ("author", "author.name"),
            ("genre", "genre.name"),
        ]
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &CreateBook,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO books (id, author_id, genre_id, name, synopsis, content, copies, cover) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(id)
        .bind(payload.author_id)
        .bind(payload.genre_id)
        .bind(&payload.name)
        .bind(&payload.synopsis)
        .bind(&payload.content)
        .bind(payload.copies)
        .bind(&payload.cover)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    async fn apply_update(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &UpdateBook,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE books SET \
             author_id = COALESCE($2, author_id), \
             genre_id = COALESCE($3, genre_id), \
             name = COALESCE($4, name), \
             synopsis = COALESCE($5, synopsis), \
             content = COALESCE($6, content), \
             copies = COALESCE($7, copies), \
             cover = COALESCE($8, cover), \
             is_new = COALESCE($9, is_new), \
             status = COALESCE($10, status), \
             queue = COALESCE($11, queue) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(payload.author_id)
        .bind(payload.genre_id)
        .bind(&payload.name)
        .bind(&payload.synopsis)
        .bind(&payload.content)
        .bind(payload.copies)
        .bind(&payload.cover)
        .bind(payload.is_new)
        .bind(&payload.status)
        .bind(payload.queue)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
