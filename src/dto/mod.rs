//! API request and response types.
//!
//! DTOs are serialized with camelCase field names to preserve the wire
//! format of the documented API (`patientId`, `docterId`, ...). Each type
//! derives `ToSchema` so the OpenAPI document stays in sync with the code.

pub mod api;
pub mod auth;
pub mod prescription;
pub mod user;
