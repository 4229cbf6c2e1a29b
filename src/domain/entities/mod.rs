//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! input is carried by a separate `New*` struct.
//!
//! - [`UrlMapping`] - A short code to long URL mapping
//! - [`NewUrlMapping`] - Input for creating a mapping

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
