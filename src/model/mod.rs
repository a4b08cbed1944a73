//! Domain models and operation-specific parameter types.
//!
//! Domain models are what services and repositories exchange; entity models
//! stay behind the data layer and DTOs stay at the controller boundary.

pub mod prescription;
pub mod user;
