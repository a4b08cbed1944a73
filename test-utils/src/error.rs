use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection or schema setup failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Password hashing failed while seeding a user.
    #[error("failed to hash factory password: {0}")]
    PasswordHash(String),
}
