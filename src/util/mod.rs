//! Shared helpers with no layer of their own.

pub mod jwt;
pub mod password;
