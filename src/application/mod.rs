//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! - [`services::url_service::UrlService`] - Mapping creation, lookup, delete

pub mod services;
