//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `urls` table.
///
/// The store is the sole source of truth: every request goes through one of
/// these operations, with no in-memory cache in front.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists
    /// (primary key violation) and [`AppError::Internal`] on other
    /// database errors.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds a mapping by its original long URL.
    ///
    /// Used to check whether a URL has already been shortened.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Lists every stored mapping in the store's natural row order.
    ///
    /// No ordering is guaranteed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<UrlMapping>, AppError>;

    /// Deletes a mapping by short code.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no row
    /// matched. Callers treat both as success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, short_code: &str) -> Result<bool, AppError>;
}
