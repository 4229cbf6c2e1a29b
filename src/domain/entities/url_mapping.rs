//! URL mapping entity.

use sqlx::FromRow;

/// A stored mapping between a short code and its original long URL.
///
/// The short code is the primary identifier; the database column is named
/// `short_url` for historical reasons.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UrlMapping {
    #[sqlx(rename = "short_url")]
    pub short_code: String,
    pub long_url: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(short_code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            long_url: long_url.into(),
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub short_code: String,
    pub long_url: String,
}
