//! Handlers for the URL mapping endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::urls::{
    CreateUrlRequest, ResolveUrlRequest, ShortenResponse, UrlMappingResponse,
};
use crate::application::services::ShortenOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored mapping.
///
/// # Endpoint
///
/// `GET /all`
///
/// # Response
///
/// 200 with a JSON array of `{short_url, long_url}` objects in the store's
/// natural row order.
///
/// # Errors
///
/// Returns 500 Internal Server Error on store failure.
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlMappingResponse>>, AppError> {
    let mappings = state.url_service.list().await?;

    Ok(Json(mappings.into_iter().map(Into::into).collect()))
}

/// Resolves a mapping by short code or long URL.
///
/// # Endpoint
///
/// `GET /`
///
/// # Request Body
///
/// ```json
/// { "short_url": "3nbe4xkn" }
/// ```
///
/// or
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// The short code takes precedence when both fields are present. Empty
/// strings count as unset.
///
/// # Errors
///
/// Returns 400 Bad Request if neither field is set.
/// Returns 404 Not Found if no mapping matches.
pub async fn resolve_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<ResolveUrlRequest>,
) -> Result<Json<UrlMappingResponse>, AppError> {
    let short_code = payload.short_url.as_deref().filter(|s| !s.is_empty());
    let long_url = payload.long_url.as_deref().filter(|s| !s.is_empty());

    let mapping = match (short_code, long_url) {
        (Some(code), _) => state.url_service.get_by_short_code(code).await?,
        (None, Some(url)) => state.url_service.get_by_long_url(url).await?,
        (None, None) => {
            return Err(AppError::bad_request(
                "At least one URL is required to fetch the other",
                json!({}),
            ));
        }
    };

    Ok(Json(mapping.into()))
}

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Response
///
/// 201 with `{short_url, long_url}` where `short_url` is the base-prefixed
/// shortened link. When the long URL was already shortened, the existing
/// mapping is returned with 200 and no row is inserted.
///
/// # Errors
///
/// Returns 400 Bad Request if `long_url` is missing or empty.
/// Returns 409 Conflict if the derived code collides with an existing one.
pub async fn shorten_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let outcome = state.url_service.shorten(payload.long_url).await?;

    let status = match outcome {
        ShortenOutcome::Created(_) => StatusCode::CREATED,
        ShortenOutcome::Existing(_) => StatusCode::OK,
    };

    let mapping = outcome.into_mapping();

    Ok((
        status,
        Json(ShortenResponse {
            short_url: format!("{}{}", state.base_url, mapping.short_code),
            long_url: mapping.long_url,
        }),
    ))
}

/// Deletes a mapping by short code.
///
/// # Endpoint
///
/// `DELETE /{short_url}`
///
/// # Behavior
///
/// Responds 204 No Content whether or not a row existed; delete-by-key is
/// idempotent from the caller's perspective.
///
/// # Errors
///
/// Returns 500 Internal Server Error on store failure.
pub async fn delete_url_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(&short_url).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::UrlService;
    use crate::domain::entities::UrlMapping;
    use crate::domain::repositories::MockUrlRepository;
    use crate::routes::app_router;
    use axum_test::TestServer;
    use std::sync::Arc;

    fn server_with(repo: MockUrlRepository) -> TestServer {
        let state = AppState {
            url_service: Arc::new(UrlService::new(Arc::new(repo))),
            base_url: "http://shorter.ss/".to_string(),
        };
        TestServer::new(app_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_list_surfaces_store_failure_as_500() {
        let mut repo = MockUrlRepository::new();
        repo.expect_list()
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let response = server_with(repo).get("/all").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "internal_error");
    }

    #[tokio::test]
    async fn test_resolve_prefers_short_code_when_both_given() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_short_code()
            .returning(|code| Ok(Some(UrlMapping::new(code, "https://by-code.example"))));
        // No expect_find_by_long_url: resolving by long URL would panic.

        let response = server_with(repo)
            .get("/")
            .json(&json!({
                "short_url": "abc123",
                "long_url": "https://by-url.example"
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["long_url"], "https://by-code.example");
    }

    #[tokio::test]
    async fn test_resolve_treats_empty_strings_as_unset() {
        let repo = MockUrlRepository::new();

        let response = server_with(repo)
            .get("/")
            .json(&json!({ "short_url": "", "long_url": "" }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_create_rejects_empty_url_without_touching_store() {
        // No expectations: any repository call fails the test.
        let repo = MockUrlRepository::new();

        let response = server_with(repo)
            .post("/")
            .json(&json!({ "long_url": "" }))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_create_collision_surfaces_as_conflict() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_long_url().returning(|_| Ok(None));
        repo.expect_insert().returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "urls_pkey" }),
            ))
        });

        let response = server_with(repo)
            .post("/")
            .json(&json!({ "long_url": "https://collides.example" }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_delete_ignores_store_miss() {
        let mut repo = MockUrlRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let response = server_with(repo).delete("/never-existed").await;

        response.assert_status(StatusCode::NO_CONTENT);
    }
}
