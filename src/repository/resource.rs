//! Generic query & lifecycle engine.
//!
//! One engine serves every resource kind. The per-entity pieces (relation
//! joins, searchable columns, permitted sort columns, insert/update SQL) come
//! from a [`Resource`] adapter; everything else here is shared: list
//! filtering, the live/deleted partition, pagination, audit stamping and
//! transaction boundaries.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow, Pool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::audit::Actor,
    pagination::{PageMeta, Paginated},
    query::{ListOptions, SortBy},
};

/// Per-entity configuration for the generic engine.
///
/// Adapters supply static SQL fragments only; the single caller-controlled
/// value reaching the database is the bound search pattern. Sort keys are
/// translated through [`Resource::permitted_sort_columns`] and anything
/// outside that map never reaches the query.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    type Entity: for<'r> FromRow<'r, PgRow> + Serialize + Unpin + Send;
    type Create: Send + Sync;
    type Update: Send + Sync;

    const TABLE: &'static str;
    const ALIAS: &'static str;
    /// Human label used in not-found messages.
    const KIND: &'static str;

    /// Columns selected for hydration, including joined relation columns.
    fn select_list() -> &'static str;

    /// LEFT JOIN clauses applied to every list and find query.
    fn relations() -> &'static [&'static str] {
        &[]
    }

    /// Predicate matched against the bound search pattern `$1`.
    fn search_predicate() -> &'static str;

    /// Public sort key -> qualified column.
    fn permitted_sort_columns() -> &'static [(&'static str, &'static str)];

    /// Insert the domain columns of a new row. Audit stamps are written by the
    /// engine in the same transaction.
    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &Self::Create,
    ) -> Result<(), sqlx::Error>;

    /// Merge payload fields onto an existing row: provided fields overwrite,
    /// absent fields are left untouched.
    async fn apply_update(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        payload: &Self::Update,
    ) -> Result<(), sqlx::Error>;
}

/// Assembled list query: row query, partition count query and the optional
/// search pattern both bind as `$1`.
pub(crate) struct ListQuery {
    pub sql: String,
    pub count_sql: String,
    pub pattern: Option<String>,
}

/// Build the list query in the pipeline's fixed order: joins, search (guarded
/// by the live partition), partition filter, allow-listed ordering,
/// pagination.
pub(crate) fn build_list_query(
    select_list: &str,
    table: &str,
    alias: &str,
    relations: &[&str],
    search_predicate: &str,
    permitted_sort_columns: &[(&str, &str)],
    options: &ListOptions,
) -> ListQuery {
    let mut from_clause = format!("FROM {} {}", table, alias);
    for join in relations {
        from_clause.push(' ');
        from_clause.push_str(join);
    }

    let pattern = options.search_term().map(|term| format!("%{}%", term));

    let mut conditions: Vec<String> = Vec::new();
    if pattern.is_some() {
        // Search never leaks across the live/deleted partition boundary.
        if options.is_deleted {
            conditions.push(format!("({})", search_predicate));
        } else {
            conditions.push(format!(
                "(({}) AND {}.deleted_at IS NULL)",
                search_predicate, alias
            ));
        }
    }
    if options.is_deleted {
        conditions.push(format!("{}.deleted_at IS NOT NULL", alias));
    } else {
        conditions.push(format!("{}.deleted_at IS NULL", alias));
    }
    let where_clause = conditions.join(" AND ");

    let count_sql = format!("SELECT COUNT(*) {} WHERE {}", from_clause, where_clause);

    let mut sql = format!(
        "SELECT {} {} WHERE {}",
        select_list, from_clause, where_clause
    );

    if let Some(order_by) = order_by_clause(&options.sort_by, permitted_sort_columns) {
        sql.push_str(" ORDER BY ");
        sql.push_str(&order_by);
    }

    if !options.disable_paginate {
        sql.push_str(&format!(
            " LIMIT {} OFFSET {}",
            options.limit.max(0),
            options.skip.max(0)
        ));
    }

    ListQuery {
        sql,
        count_sql,
        pattern,
    }
}

/// Translate requested sort keys through the allow-list. Unknown keys are
/// dropped; only the map's static column strings ever reach the query.
fn order_by_clause(sort_by: &[SortBy], permitted: &[(&str, &str)]) -> Option<String> {
    let terms: Vec<String> = sort_by
        .iter()
        .filter_map(|sort| {
            permitted
                .iter()
                .find(|(key, _)| *key == sort.key)
                .map(|(_, column)| format!("{} {}", column, sort.direction.as_sql()))
        })
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms.join(", "))
    }
}

/// Generic repository over one resource kind.
pub struct ResourceRepository<R: Resource> {
    pool: Pool<Postgres>,
    _resource: PhantomData<R>,
}

impl<R: Resource> Clone for ResourceRepository<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceRepository<R> {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pool,
            _resource: PhantomData,
        }
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("{} {} not found", R::KIND, id))
    }

    fn find_one_sql() -> String {
        let mut sql = format!(
            "SELECT {} FROM {} {}",
            R::select_list(),
            R::TABLE,
            R::ALIAS
        );
        for join in R::relations() {
            sql.push(' ');
            sql.push_str(join);
        }
        sql.push_str(&format!(" WHERE {}.id = $1", R::ALIAS));
        sql
    }

    /// List one partition (live or soft-deleted) with search, ordering and
    /// pagination applied. Store failures here are caller-correctable, so
    /// they surface as bad requests.
    pub async fn find_all(&self, options: &ListOptions) -> AppResult<Paginated<R::Entity>> {
        let query = build_list_query(
            R::select_list(),
            R::TABLE,
            R::ALIAS,
            R::relations(),
            R::search_predicate(),
            R::permitted_sort_columns(),
            options,
        );

        let rows: Vec<R::Entity> = match &query.pattern {
            Some(pattern) => {
                sqlx::query_as(&query.sql)
                    .bind(pattern)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => sqlx::query_as(&query.sql).fetch_all(&self.pool).await?,
        };

        // Partition count, independent of pagination.
        let total_data: i64 = match &query.pattern {
            Some(pattern) => {
                sqlx::query_scalar(&query.count_sql)
                    .bind(pattern)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_scalar(&query.count_sql)
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        let total = rows.len() as i64;
        let size = if options.disable_paginate {
            total_data
        } else {
            options.limit
        };

        Ok(Paginated::new(
            rows,
            PageMeta::new(options.skip, size, total, total_data),
        ))
    }

    /// Load one record by identifier, relations hydrated, regardless of its
    /// deletion state.
    pub async fn find_one_by_id(&self, id: Uuid) -> AppResult<R::Entity> {
        sqlx::query_as(&Self::find_one_sql())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Create a record: insert the domain columns and stamp the creating
    /// actor inside one transaction, then return the hydrated row.
    pub async fn create(&self, payload: &R::Create, actor: &Actor) -> AppResult<R::Entity> {
        let id = Uuid::new_v4();
        let mut tx = self.pool.begin().await?;

        R::insert(&mut tx, id, payload).await?;

        let now = Utc::now().timestamp();
        sqlx::query(&format!(
            "UPDATE {} SET created_at = $1, updated_at = $1, \
             created_by = $2, created_by_id = $3, updated_by = $2, updated_by_id = $3 \
             WHERE id = $4",
            R::TABLE
        ))
        .bind(now)
        .bind(&actor.display_name)
        .bind(actor.id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(kind = R::KIND, %id, "created record");

        // Read-back after commit; hydration goes through the same query as
        // the list pipeline.
        self.find_one_by_id(id).await
    }

    /// Merge a payload onto an existing record and stamp the updating actor,
    /// inside one transaction. An unknown identifier is not found, never a
    /// bad request.
    pub async fn update(&self, id: Uuid, payload: &R::Update, actor: &Actor) -> AppResult<R::Entity> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<Uuid> =
            sqlx::query_scalar(&format!("SELECT id FROM {} WHERE id = $1", R::TABLE))
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            return Err(Self::not_found(id));
        }

        R::apply_update(&mut tx, id, payload).await?;

        sqlx::query(&format!(
            "UPDATE {} SET updated_at = $1, updated_by = $2, updated_by_id = $3 WHERE id = $4",
            R::TABLE
        ))
        .bind(Utc::now().timestamp())
        .bind(&actor.display_name)
        .bind(actor.id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        self.find_one_by_id(id).await
    }

    /// Soft-delete: stamp `deleted_at` and the deleting actor. Re-deleting an
    /// already-deleted record simply re-stamps; callers wanting delete-is-final
    /// semantics must check `is_deleted()` themselves.
    pub async fn soft_delete(&self, id: Uuid, actor: &Actor) -> AppResult<R::Entity> {
        let now = Utc::now().timestamp();
        let result = sqlx::query(&format!(
            "UPDATE {} SET deleted_at = $1, deleted_by = $2, deleted_by_id = $3, updated_at = $1 \
             WHERE id = $4",
            R::TABLE
        ))
        .bind(now)
        .bind(&actor.display_name)
        .bind(actor.id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }

        self.find_one_by_id(id).await
    }

    /// Restore: clear the deletion stamps and mark the restoring actor as the
    /// updater. Everything else is left at its pre-delete value.
    pub async fn restore(&self, id: Uuid, actor: &Actor) -> AppResult<R::Entity> {
        let result = sqlx::query(&format!(
            "UPDATE {} SET deleted_at = NULL, deleted_by = NULL, deleted_by_id = NULL, \
             updated_at = $1, updated_by = $2, updated_by_id = $3 \
             WHERE id = $4",
            R::TABLE
        ))
        .bind(Utc::now().timestamp())
        .bind(&actor.display_name)
        .bind(actor.id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }

        self.find_one_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SortBy, SortDirection};

    const PERMITTED: &[(&str, &str)] = &[("name", "authors.name")];

    fn build(options: &ListOptions) -> ListQuery {
        build_list_query(
            "authors.*",
            "authors",
            "authors",
            &[],
            "authors.name ILIKE $1",
            PERMITTED,
            options,
        )
    }

    #[test]
    fn default_listing_filters_live_partition() {
        let query = build(&ListOptions::default());
        assert!(query.sql.contains("WHERE authors.deleted_at IS NULL"));
        assert!(query.sql.ends_with("LIMIT 10 OFFSET 0"));
        assert!(query.count_sql.contains("authors.deleted_at IS NULL"));
        assert!(query.pattern.is_none());
    }

    #[test]
    fn deleted_listing_filters_deleted_partition() {
        let options = ListOptions {
            is_deleted: true,
            ..Default::default()
        };
        let query = build(&options);
        assert!(query.sql.contains("authors.deleted_at IS NOT NULL"));
        assert!(!query.sql.contains("deleted_at IS NULL"));
    }

    #[test]
    fn search_binds_pattern_and_guards_partition() {
        let options = ListOptions {
            search: Some("jane".to_string()),
            ..Default::default()
        };
        let query = build(&options);
        assert_eq!(query.pattern.as_deref(), Some("%jane%"));
        assert!(query
            .sql
            .contains("((authors.name ILIKE $1) AND authors.deleted_at IS NULL)"));
        // The partition filter also applies on its own.
        assert!(query.sql.contains("AND authors.deleted_at IS NULL"));
    }

    #[test]
    fn search_in_deleted_partition_skips_live_guard() {
        let options = ListOptions {
            search: Some("jane".to_string()),
            is_deleted: true,
            ..Default::default()
        };
        let query = build(&options);
        assert!(query.sql.contains("(authors.name ILIKE $1)"));
        assert!(!query.sql.contains("deleted_at IS NULL"));
    }

    #[test]
    fn permitted_sort_key_is_translated() {
        let options = ListOptions {
            sort_by: vec![SortBy::new("name", SortDirection::Desc)],
            ..Default::default()
        };
        let query = build(&options);
        assert!(query.sql.contains("ORDER BY authors.name DESC"));
    }

    #[test]
    fn unknown_sort_key_never_reaches_sql() {
        let options = ListOptions {
            sort_by: vec![SortBy::new(
                "name; DROP TABLE authors",
                SortDirection::Asc,
            )],
            ..Default::default()
        };
        let query = build(&options);
        assert!(!query.sql.contains("ORDER BY"));
        assert!(!query.sql.contains("DROP TABLE"));
    }

    #[test]
    fn disable_paginate_drops_limit_and_offset() {
        let options = ListOptions {
            disable_paginate: true,
            limit: 5,
            skip: 20,
            ..Default::default()
        };
        let query = build(&options);
        assert!(!query.sql.contains("LIMIT"));
        assert!(!query.sql.contains("OFFSET"));
    }

    #[test]
    fn count_query_ignores_pagination_and_ordering() {
        let options = ListOptions {
            sort_by: vec![SortBy::new("name", SortDirection::Asc)],
            limit: 2,
            skip: 4,
            ..Default::default()
        };
        let query = build(&options);
        assert!(!query.count_sql.contains("LIMIT"));
        assert!(!query.count_sql.contains("ORDER BY"));
    }

    #[test]
    fn relations_join_every_query() {
        let options = ListOptions::default();
        let query = build_list_query(
            "books.*, authors.name AS author_name",
            "books",
            "books",
            &["LEFT JOIN authors ON authors.id = books.author_id"],
            "books.name ILIKE $1",
            &[],
            &options,
        );
        assert!(query.sql.contains("LEFT JOIN authors"));
        assert!(query.count_sql.contains("LEFT JOIN authors"));
    }
}
