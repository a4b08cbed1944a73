//! Entity factories for seeding test data.
//!
//! Each factory inserts one entity with sensible defaults and supports
//! builder-style overrides for the fields a test cares about.

pub mod helpers;
pub mod prescription;
pub mod user;
