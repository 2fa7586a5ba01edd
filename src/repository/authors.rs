//! Authors resource adapter

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::models::author::{Author, CreateAuthor, UpdateAuthor};

use super::resource::{Resource, ResourceRepository};

pub struct AuthorsResource;

pub type AuthorsRepository = ResourceRepository<AuthorsResource>;

#[async_trait]
impl Resource for AuthorsResource {
    type Entity = Author;
    type Create = CreateAuthor;
    type Update = UpdateAuthor;

    const TABLE: &'static str = "authors";
    const ALIAS: &'static str = "authors";
    const KIND: &'static str = "Author";

    fn select_list() -> &'static str {
        "authors.*"
    }

    fn search_predicate() -> &'static str {
        "authors.name ILIKE $1"
    }

    fn permitted_sort_columns() -> &'static [(&'static str, &'static str)] {
        &[("name", "authors.name")]
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &CreateAuthor,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO authors (id, name) VALUES ($1, $2)")
            .bind(id)
            .bind(&payload.name)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    async fn apply_update(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &UpdateAuthor,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE authors SET name = COALESCE($2, name) WHERE id = $1")
            .bind(id)
            .bind(&payload.name)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
