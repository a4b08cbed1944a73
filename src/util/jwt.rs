//! Bearer token encoding and decoding.
//!
//! Tokens are HS256 JWTs with the minimal claims the application needs: the
//! user id as subject plus issue and expiry timestamps. Signature
//! verification and expiry checks happen in `decode_token`; everything else
//! about the principal (existence, confirmation, soft delete) is the auth
//! guard's job.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{auth::AuthError, AppError};

/// Claims carried by an issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id the token was issued to.
    pub sub: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Signs a new bearer token for the given user.
///
/// # Arguments
/// - `secret` - HS256 signing secret
/// - `user_id` - Subject the token is issued to
/// - `ttl_hours` - Token lifetime in hours
///
/// # Returns
/// - `Ok(String)` - Encoded JWT
/// - `Err(AppError::InternalError)` - Signing failed
pub fn encode_token(secret: &str, user_id: &str, ttl_hours: i64) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(ttl_hours)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
}

/// Decodes and validates a bearer token.
///
/// # Arguments
/// - `secret` - HS256 signing secret
/// - `token` - Raw JWT from the Authorization header
///
/// # Returns
/// - `Ok(Claims)` - Verified claims
/// - `Err(AuthError::TokenExpired)` - Token past its expiry claim
/// - `Err(AuthError::InvalidToken)` - Bad signature or malformed token
pub fn decode_token(secret: &str, token: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })
}
