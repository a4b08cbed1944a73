//! HTTP request handlers.
//!
//! Controllers authenticate the request where the route is protected,
//! convert DTOs to service parameters, call the service, and convert the
//! result back to a DTO response.

pub mod auth;
pub mod prescription;
pub mod user;
