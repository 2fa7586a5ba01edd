//! Librarium entity engine
//!
//! The persistence layer of the Librarium library management backend:
//! a generic query & lifecycle engine over PostgreSQL, parameterized per
//! resource kind (authors, genres, books, bookings, notifications, users,
//! user interests). Routing, validation and authentication live in the
//! surrounding application; this crate owns listing, soft-delete and
//! transactional mutation semantics.

pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use models::audit::{Actor, Audit};
pub use pagination::{PageMeta, Paginated};
pub use query::{ListOptions, SortBy, SortDirection};
pub use repository::Repository;
