//! Genres resource adapter

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::models::genre::{CreateGenre, Genre, UpdateGenre};

use super::resource::{Resource, ResourceRepository};

pub struct GenresResource;

pub type GenresRepository = ResourceRepository<GenresResource>;

#[async_trait]
impl Resource for GenresResource {
    type Entity = Genre;
    type Create = CreateGenre;
    type Update = UpdateGenre;

    const TABLE: &'static str = "genres";
    const ALIAS: &'static str = "genres";
    const KIND: &'static str = "Genre";

    fn select_list() -> &'static str {
        "genres.*"
    }

    fn search_predicate() -> &'static str {
        "genres.name ILIKE $1"
    }

    fn permitted_sort_columns() -> &'static [(&'static str, &'static str)] {
        &[("name", "genres.name")]
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &CreateGenre,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO genres (id, name) VALUES ($1, $2)")
            .bind(id)
            .bind(&payload.name)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    async fn apply_update(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &UpdateGenre,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE genres SET name = COALESCE($2, name) WHERE id = $1")
            .bind(id)
            .bind(&payload.name)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
