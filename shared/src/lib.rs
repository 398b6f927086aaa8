//! Shared types and models for the AgriPredict platform
//!
//! This crate contains the API-facing types shared between the backend and
//! any frontend consuming the JSON endpoints.

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
