//! Bearer-token authentication guard.
//!
//! Controllers call `AuthGuard::require` before any business logic. The guard
//! extracts the `Authorization: Bearer` header, verifies the JWT signature
//! and expiry, and resolves the token subject to a live, confirmed user.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::jwt,
};

/// Guard for verifying bearer-token authentication on protected routes.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str) -> Self {
        Self { db, jwt_secret }
    }

    /// Authenticates the request and resolves the calling user.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying the `Authorization` header
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated, confirmed user
    /// - `Err(AppError::AuthErr)` - Missing/invalid/expired token, unknown
    ///   subject, or unconfirmed account (all 401)
    pub async fn require(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let token = extract_bearer(headers)?;
        let claims = jwt::decode_token(self.jwt_secret, token)?;

        // Soft-deleted users drop out of find_by_id, so their tokens die with
        // the account.
        let user = UserRepository::new(self.db)
            .find_by_id(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound(claims.sub))?;

        if !user.is_registered {
            return Err(AuthError::AccountNotConfirmed(user.email).into());
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidToken)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidToken);
    }

    Ok(token)
}
