//! DTOs for the URL mapping endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlMapping;

/// Request to shorten a long URL.
///
/// A missing `long_url` field deserializes to the empty string and is
/// rejected by validation, matching the upstream "Long URL is required"
/// contract with a 400 rather than a body-rejection status.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Long URL is required"))]
    pub long_url: String,
}

/// Request to resolve a mapping by either of its fields.
///
/// At least one field must be set; the short code takes precedence when
/// both are given. Empty strings count as unset.
#[derive(Debug, Default, Deserialize)]
pub struct ResolveUrlRequest {
    pub short_url: Option<String>,
    pub long_url: Option<String>,
}

/// A stored mapping as returned by list and resolve.
///
/// `short_url` carries the raw code, not the base-prefixed link.
#[derive(Debug, Serialize)]
pub struct UrlMappingResponse {
    pub short_url: String,
    pub long_url: String,
}

impl From<UrlMapping> for UrlMappingResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            short_url: mapping.short_code,
            long_url: mapping.long_url,
        }
    }
}

/// Response to a shorten request.
///
/// `short_url` is the full shortened link: the configured base URL with the
/// code appended.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_missing_field_fails_validation() {
        let req: CreateUrlRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_empty_url_fails_validation() {
        let req: CreateUrlRequest = serde_json::from_str(r#"{"long_url": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_non_empty_url() {
        let req: CreateUrlRequest =
            serde_json::from_str(r#"{"long_url": "https://example.com"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.long_url, "https://example.com");
    }

    #[test]
    fn test_mapping_response_uses_raw_code() {
        let response = UrlMappingResponse::from(UrlMapping::new("3nbe4xkn", "https://example.com"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["short_url"], "3nbe4xkn");
        assert_eq!(json["long_url"], "https://example.com");
    }
}
