//! URL mapping creation and retrieval service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Result of a shorten request.
///
/// Distinguishes a freshly inserted mapping from an existing one so the
/// handler can answer 201 or 200 accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    Created(UrlMapping),
    Existing(UrlMapping),
}

impl ShortenOutcome {
    /// Returns the mapping regardless of whether it was just created.
    pub fn into_mapping(self) -> UrlMapping {
        match self {
            ShortenOutcome::Created(m) | ShortenOutcome::Existing(m) => m,
        }
    }
}

/// Service for creating and retrieving URL mappings.
///
/// Holds the repository behind an injected trait object so handlers stay
/// testable against a substitutable store.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short mapping for a long URL.
    ///
    /// # Deduplication
    ///
    /// If the exact long URL was already shortened, the existing mapping is
    /// returned as [`ShortenOutcome::Existing`] and no row is inserted.
    /// Otherwise the code is derived deterministically via
    /// [`generate_code`] and the new row is inserted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the insert violates the short code
    /// primary key (two different URLs hashing to the same truncated code).
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn shorten(&self, long_url: String) -> Result<ShortenOutcome, AppError> {
        if let Some(existing) = self.repository.find_by_long_url(&long_url).await? {
            return Ok(ShortenOutcome::Existing(existing));
        }

        let short_code = generate_code(&long_url);

        let mapping = self
            .repository
            .insert(NewUrlMapping {
                short_code,
                long_url,
            })
            .await?;

        Ok(ShortenOutcome::Created(mapping))
    }

    /// Retrieves a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_short_code(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "short_url": short_code }))
            })
    }

    /// Retrieves a mapping by its original long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the URL was never shortened.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_long_url(&self, long_url: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_long_url(long_url)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "long_url": long_url }))
            })
    }

    /// Lists every stored mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<UrlMapping>, AppError> {
        self.repository.list().await
    }

    /// Deletes a mapping by short code.
    ///
    /// Idempotent from the caller's perspective: deleting a code that does
    /// not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, short_code: &str) -> Result<(), AppError> {
        let removed = self.repository.delete(short_code).await?;
        if !removed {
            tracing::debug!(short_code, "Delete matched no row");
        }
        Ok(())
    }
}
