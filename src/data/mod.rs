//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD) for each domain in
//! the application. Repositories use SeaORM entity models internally and
//! return domain models to keep the data layer separated from the business
//! logic layer.

pub mod prescription;
pub mod user;
