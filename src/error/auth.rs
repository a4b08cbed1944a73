use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature or format validation.
    #[error("Invalid bearer token")]
    InvalidToken,

    /// The bearer token is past its expiry claim.
    #[error("Bearer token expired")]
    TokenExpired,

    /// The token subject no longer resolves to a live user (deleted account
    /// or stale token).
    #[error("Token subject '{0}' not found")]
    UserNotFound(String),

    /// The account exists but its registration was never confirmed.
    #[error("Account '{0}' is not confirmed")]
    AccountNotConfirmed(String),

    /// Email/password pair did not match a confirmed account.
    #[error("Invalid credentials for '{0}'")]
    InvalidCredentials(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized. The detailed variant messages are
/// logged at debug level for diagnostics while client-facing messages stay
/// generic to avoid leaking which part of the credential failed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("auth failure: {}", self);

        let message = match self {
            Self::TokenExpired => "Token expired, please log in again.",
            Self::InvalidCredentials(_) => "Invalid email or password.",
            Self::AccountNotConfirmed(_) => "Account registration is not confirmed.",
            _ => "Authentication required.",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
