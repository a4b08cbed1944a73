//! Business logic layer between controllers and the data layer.
//!
//! Services validate input, run cross-entity existence checks, and translate
//! data-layer failures into the HTTP status mapping the API contract
//! documents.

pub mod auth;
pub mod prescription;
pub mod user;
