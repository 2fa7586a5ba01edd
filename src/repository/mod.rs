//! Repository layer for database operations

pub mod authors;
pub mod bookings;
pub mod books;
pub mod genres;
pub mod notifications;
pub mod resource;
pub mod user_interests;
pub mod users;

use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::{config::DatabaseConfig, error::AppResult};

pub use resource::{Resource, ResourceRepository};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub genres: genres::GenresRepository,
    pub books: books::BooksRepository,
    pub bookings: bookings::BookingsRepository,
    pub notifications: notifications::NotificationsRepository,
    pub users: users::UsersRepository,
    pub user_interests: user_interests::UserInterestsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            genres: genres::GenresRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            notifications: notifications::NotificationsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            user_interests: user_interests::UserInterestsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Connect a pool with the configured limits and wrap it
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect(&config.url)
            .await?;

        tracing::info!("Connected to database");

        Ok(Self::new(pool))
    }
}
