//! User interests resource adapter

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::models::user_interest::{CreateUserInterest, UpdateUserInterest, UserInterest};

use super::resource::{Resource, ResourceRepository};

pub struct UserInterestsResource;

pub type UserInterestsRepository = ResourceRepository<UserInterestsResource>;

#[async_trait]
impl Resource for UserInterestsResource {
    type Entity = UserInterest;
    type Create = CreateUserInterest;
    type Update = UpdateUserInterest;

    const TABLE: &'static str = "user_interests";
    const ALIAS: &'static str = "user_interests";
    const KIND: &'static str = "UserInterest";

    fn select_list() -> &'static str {
        "user_interests.*, genre.name AS genre_name, owner.username AS username"
    }

    fn relations() -> &'static [&'static str] {
        &[
            "LEFT JOIN genres genre ON genre.id = user_interests.genre_id",
            "LEFT JOIN users owner ON owner.id = user_interests.user_id",
        ]
    }

    fn search_predicate() -> &'static str {
        "genre.name ILIKE $1 OR owner.username ILIKE $1"
    }

    fn permitted_sort_columns() -> &'static [(&'static str, &'static str)] {
        &[("genre", "genre.name"), ("username", "owner.username")]
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &CreateUserInterest,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO user_interests (id, user_id, genre_id) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(payload.user_id)
            .bind(payload.genre_id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    async fn apply_update(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &UpdateUserInterest,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE user_interests SET \
             user_id = COALESCE($2, user_id), \
             genre_id = COALESCE($3, genre_id) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(payload.user_id)
        .bind(payload.genre_id)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
