//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! - [`PgUrlRepository`] - URL mapping storage and retrieval

pub mod pg_url_repository;

pub use pg_url_repository::PgUrlRepository;
