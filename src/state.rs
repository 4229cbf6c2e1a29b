use std::sync::Arc;

use crate::application::services::UrlService;

/// Shared application state injected into every handler.
///
/// The service holds the store behind a repository trait, so tests can
/// substitute an in-memory or mocked store.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    /// Fixed prefix prepended to codes in shorten responses.
    pub base_url: String,
}
