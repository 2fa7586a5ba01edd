//! Users resource adapter

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::models::user::{CreateUser, UpdateUser, User};

use super::resource::{Resource, ResourceRepository};

pub struct UsersResource;

pub type UsersRepository = ResourceRepository<UsersResource>;

#[async_trait]
impl Resource for UsersResource {
    type Entity = User;
    type Create = CreateUser;
    type Update = UpdateUser;

    const TABLE: &'static str = "users";
    const ALIAS: &'static str = "users";
    const KIND: &'static str = "User";

    fn select_list() -> &'static str {
        "users.*"
    }

    fn search_predicate() -> &'static str {
        "users.username ILIKE $1 OR users.email ILIKE $1"
    }

    fn permitted_sort_columns() -> &'static [(&'static str, &'static str)] {
        &[("username", "users.username"), ("email", "users.email")]
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &CreateUser,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO users (id, username, email, password) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(&payload.username)
            .bind(&payload.email)
            .bind(&payload.password)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    async fn apply_update(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &UpdateUser,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET \
             username = COALESCE($2, username), \
             email = COALESCE($3, email), \
             password = COALESCE($4, password) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&payload.username)
        .bind(&payload.email)
        .bind(&payload.password)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
