#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use shorter::application::services::UrlService;
use shorter::domain::entities::{NewUrlMapping, UrlMapping};
use shorter::domain::repositories::UrlRepository;
use shorter::error::AppError;
use shorter::routes::app_router;
use shorter::state::AppState;

/// In-memory store standing in for PostgreSQL, keyed by short code.
///
/// Enforces the same uniqueness the `urls` primary key would.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    rows: Mutex<HashMap<String, String>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, short_code: &str, long_url: &str) {
        self.rows
            .lock()
            .unwrap()
            .insert(short_code.to_string(), long_url.to_string());
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&new_mapping.short_code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                serde_json::json!({ "constraint": "urls_pkey" }),
            ));
        }
        rows.insert(new_mapping.short_code.clone(), new_mapping.long_url.clone());
        Ok(UrlMapping::new(new_mapping.short_code, new_mapping.long_url))
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .get(short_code)
            .map(|long_url| UrlMapping::new(short_code, long_url.clone())))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|(_, url)| url.as_str() == long_url)
            .map(|(code, url)| UrlMapping::new(code.clone(), url.clone())))
    }

    async fn list(&self) -> Result<Vec<UrlMapping>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .map(|(code, url)| UrlMapping::new(code.clone(), url.clone()))
            .collect())
    }

    async fn delete(&self, short_code: &str) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.remove(short_code).is_some())
    }
}

/// Builds the full application router over an in-memory store.
///
/// Returns the repository handle alongside so tests can seed and inspect
/// rows directly.
pub fn create_test_app() -> (Router, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());

    let state = AppState {
        url_service: Arc::new(UrlService::new(repository.clone())),
        base_url: "http://shorter.ss/".to_string(),
    };

    (app_router(state), repository)
}
