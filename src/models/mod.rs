//! Data models for Librarium

pub mod audit;
pub mod author;
pub mod book;
pub mod booking;
pub mod genre;
pub mod notification;
pub mod user;
pub mod user_interest;

// Re-export commonly used types
pub use audit::{Actor, Audit};
pub use author::Author;
pub use book::Book;
pub use booking::Booking;
pub use genre::Genre;
pub use notification::Notification;
pub use user::User;
pub use user_interest::UserInterest;
