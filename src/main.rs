//! Clinic backend API server.
//!
//! A layered web backend for a clinic-style application exposing
//! authenticated CRUD endpoints for user accounts and medical
//! prescriptions, with generated API documentation.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **DTO Layer** (`dto/`) - API request/response types and OpenAPI schemas
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Request Flow
//!
//! 1. **Router** receives an HTTP request and routes it to a controller
//! 2. **Controller** runs the auth guard, converts DTOs to params, calls a service
//! 3. **Service** executes business logic and orchestrates data operations
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

mod config;
mod controller;
mod data;
mod docs;
mod dto;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let config = config::Config::from_env()?;

    startup::init_tracing(&config)?;

    let db = startup::connect_to_database(&config).await?;

    let state = state::AppState::new(db, &config);
    let app = router::router().with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
