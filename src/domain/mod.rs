//! Domain layer containing business entities and data-access contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits defined here are implemented by
//! [`crate::infrastructure::persistence`] and consumed by
//! [`crate::application::services`].
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
