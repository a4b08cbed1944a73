//! Request guards shared across controllers.

pub mod auth;
