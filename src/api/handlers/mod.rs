//! HTTP request handlers for API endpoints.

pub mod urls;

pub use urls::{delete_url_handler, list_urls_handler, resolve_url_handler, shorten_url_handler};
